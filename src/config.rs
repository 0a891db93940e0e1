//! Project configuration for a scaffold run.
//! Holds the closed option sets, the defaults applied in non-interactive mode,
//! and the lookups that turn ambient state (working directory, lockfiles,
//! environment) into configuration values.

use crate::constants::TEMPLATE_DIR_ENV;
use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Application framework. Only Next.js is scaffolded today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum Framework {
    #[default]
    #[serde(rename = "nextjs")]
    #[value(name = "nextjs")]
    NextJs,
}

/// Database backing the generated data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    None,
    #[default]
    Sqlite,
    Postgres,
    Mysql,
}

/// Authentication provider wired into the generated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum Auth {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "better-auth")]
    BetterAuth,
}

/// Optional example pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Example {
    Todo,
    Blog,
}

/// Package manager used for installs and in generated instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Bun,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::NextJs => "nextjs",
        }
    }
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::None => "none",
            Database::Sqlite => "sqlite",
            Database::Postgres => "postgres",
            Database::Mysql => "mysql",
        }
    }
}

impl Auth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::BetterAuth => "better-auth",
        }
    }
}

impl Example {
    pub fn as_str(&self) -> &'static str {
        match self {
            Example::Todo => "todo",
            Example::Blog => "blog",
        }
    }
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Program and arguments that install every declared dependency.
    pub fn install_command(&self) -> (&'static str, [&'static str; 1]) {
        (self.as_str(), ["install"])
    }

    /// Prefix used to run a package script, e.g. `pnpm run`.
    pub fn run_command(&self) -> String {
        format!("{} run", self.as_str())
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(Framework, Database, Auth, Example, PackageManager);

/// The single source of truth for one scaffold run.
///
/// Built once from flags and prompt answers, validated, and then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub framework: Framework,
    pub database: Database,
    pub auth: Auth,
    pub examples: Vec<Example>,
    pub git: bool,
    pub install: bool,
    pub package_manager: PackageManager,
}

impl ProjectConfig {
    /// Creates a configuration with default choices for `project_name`,
    /// placing the project under `base_dir`.
    pub fn new<S: Into<String>, P: AsRef<Path>>(project_name: S, base_dir: P) -> Self {
        let project_name = project_name.into();
        let project_dir = resolve_project_dir(base_dir, &project_name);
        Self {
            project_name,
            project_dir,
            framework: Framework::default(),
            database: Database::default(),
            auth: Auth::default(),
            examples: Vec::new(),
            git: true,
            install: true,
            package_manager: PackageManager::default(),
        }
    }

    /// Replaces the example selection. Order and duplicates are dropped.
    pub fn with_examples<I: IntoIterator<Item = Example>>(mut self, examples: I) -> Self {
        let mut examples: Vec<Example> = examples.into_iter().collect();
        examples.sort();
        examples.dedup();
        self.examples = examples;
        self
    }

    /// Name written into the project manifest.
    ///
    /// For `.` this is the name of the directory being scaffolded into.
    pub fn package_name(&self) -> String {
        if self.project_name == "." {
            self.project_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.project_name.clone())
        } else {
            self.project_name.clone()
        }
    }
}

/// Joins the project name onto `base_dir`; `.` means `base_dir` itself.
pub fn resolve_project_dir<P: AsRef<Path>>(base_dir: P, project_name: &str) -> PathBuf {
    let base_dir = base_dir.as_ref();
    if project_name == "." {
        base_dir.to_path_buf()
    } else {
        base_dir.join(project_name)
    }
}

/// Picks the template root: explicit override, then environment, then the
/// tree bundled with the crate.
pub fn resolve_template_root(template_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = template_dir {
        debug!("Using template root from command line: {}", dir.display());
        return dir;
    }
    if let Some(dir) = std::env::var_os(TEMPLATE_DIR_ENV).filter(|v| !v.is_empty()) {
        let dir = PathBuf::from(dir);
        debug!("Using template root from {}: {}", TEMPLATE_DIR_ENV, dir.display());
        return dir;
    }
    bundled_template_root()
}

/// The `templates/` directory shipped alongside the crate sources.
pub fn bundled_template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Guesses the package manager from lockfiles in `dir`.
pub fn detect_package_manager<P: AsRef<Path>>(dir: P) -> PackageManager {
    let dir = dir.as_ref();
    let detected = if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
        PackageManager::Bun
    } else if dir.join("pnpm-lock.yaml").exists() {
        PackageManager::Pnpm
    } else {
        PackageManager::Npm
    };
    debug!("Detected package manager '{}' in {}", detected, dir.display());
    detected
}
