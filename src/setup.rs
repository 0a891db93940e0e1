//! Project setup orchestration.
//!
//! Runs the scaffold as one all-or-nothing unit:
//! create the project directory, render the base templates, run the selected
//! installers, then optionally install dependencies and initialize git.
//! If any step fails, the project directory is removed and the original error
//! is returned unchanged.

use crate::config::ProjectConfig;
use crate::constants::BASE_TEMPLATES_DIR;
use crate::context::build_context;
use crate::deps::DependencyInstaller;
use crate::error::{Error, Result};
use crate::git::GitInitializer;
use crate::installers::{run_installers, selected_installers, InstallContext};
use crate::processor::Processor;
use crate::renderer::TemplateRenderer;
use crate::validation::validate_config;
use crate::versions::VersionCatalog;
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Progress of a setup run. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Start,
    DirCreated,
    BaseRendered,
    InstallersRun,
    DepsInstalled,
    GitInitialized,
    Done,
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SetupStage::Start => "start",
            SetupStage::DirCreated => "directory created",
            SetupStage::BaseRendered => "base templates rendered",
            SetupStage::InstallersRun => "installers run",
            SetupStage::DepsInstalled => "dependencies installed",
            SetupStage::GitInitialized => "git initialized",
            SetupStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Removes the project directory when dropped, unless disarmed.
///
/// A directory that already existed (an empty target, or `.`) is emptied
/// instead of removed.
struct ProjectDirGuard {
    path: PathBuf,
    preexisting: bool,
    armed: bool,
}

impl ProjectDirGuard {
    fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf(), preexisting: path.is_dir(), armed: true }
    }

    fn clear(&self) -> std::io::Result<()> {
        if !self.preexisting {
            return fs::remove_dir_all(&self.path);
        }
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ProjectDirGuard {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }
        // A failed cleanup must not replace the error that triggered it.
        match self.clear() {
            Ok(()) => debug!("Removed {}", self.path.display()),
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

/// The setup orchestrator and the collaborators it drives.
pub struct ProjectSetup<'a> {
    template_root: &'a Path,
    renderer: &'a dyn TemplateRenderer,
    dependencies: &'a dyn DependencyInstaller,
    git: &'a dyn GitInitializer,
    versions: &'a VersionCatalog,
}

impl<'a> ProjectSetup<'a> {
    pub fn new(
        template_root: &'a Path,
        renderer: &'a dyn TemplateRenderer,
        dependencies: &'a dyn DependencyInstaller,
        git: &'a dyn GitInitializer,
        versions: &'a VersionCatalog,
    ) -> Self {
        Self { template_root, renderer, dependencies, git, versions }
    }

    /// Validates `config` and then runs every setup step.
    ///
    /// A validation failure returns before anything is created. On any later
    /// failure the project directory no longer exists when this returns,
    /// unless it existed before the run, in which case it is left empty.
    pub fn create(&self, config: &ProjectConfig) -> Result<()> {
        validate_config(config)?;
        self.run(config)
    }

    /// Runs every setup step for an already validated `config`.
    ///
    /// On failure a directory created by the run is removed, and one that
    /// existed before it is emptied.
    fn run(&self, config: &ProjectConfig) -> Result<()> {
        info!("Setting up project: {}", config.project_name);

        let guard = ProjectDirGuard::new(&config.project_dir);
        let mut stage = SetupStage::Start;

        match self.execute(config, &mut stage) {
            Ok(()) => {
                guard.disarm();
                advance(&mut stage, SetupStage::Done);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Setup failed after stage '{}', removing {}",
                    stage,
                    config.project_dir.display()
                );
                drop(guard);
                Err(e)
            }
        }
    }

    fn execute(&self, config: &ProjectConfig, stage: &mut SetupStage) -> Result<()> {
        let project_dir = &config.project_dir;

        fs::create_dir_all(project_dir)?;
        advance(stage, SetupStage::DirCreated);

        let context = build_context(config, self.versions).to_value()?;
        let processor = Processor::new(self.renderer)?;

        let base_dir = self.template_root.join(BASE_TEMPLATES_DIR);
        if !base_dir.is_dir() {
            return Err(Error::TemplateNotFound { template_dir: base_dir.display().to_string() });
        }
        processor.render_tree(&base_dir, project_dir, &context)?;
        advance(stage, SetupStage::BaseRendered);

        let installers = selected_installers(config);
        let install_ctx = InstallContext {
            config,
            template_root: self.template_root,
            processor: &processor,
            context: &context,
            versions: self.versions,
        };
        run_installers(&installers, &install_ctx)?;
        advance(stage, SetupStage::InstallersRun);

        if config.install {
            self.dependencies.install(project_dir, config.package_manager)?;
            advance(stage, SetupStage::DepsInstalled);
        }

        if config.git {
            self.git.init(project_dir)?;
            advance(stage, SetupStage::GitInitialized);
        }

        Ok(())
    }
}

fn advance(stage: &mut SetupStage, next: SetupStage) {
    debug!("Setup stage: {} -> {}", stage, next);
    *stage = next;
}
