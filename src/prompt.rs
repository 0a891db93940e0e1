//! User input and interaction handling.
//! Turns command-line flags plus interactive answers into a ProjectConfig.

use crate::cli::Args;
use crate::config::{detect_package_manager, Auth, Database, Example, ProjectConfig};
use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use dialoguer::{Input, MultiSelect, Select};
use log::debug;
use std::path::Path;

const DATABASE_CHOICES: [(Database, &str); 4] = [
    (Database::Postgres, "PostgreSQL"),
    (Database::Sqlite, "SQLite"),
    (Database::Mysql, "MySQL"),
    (Database::None, "None - no database"),
];

const AUTH_CHOICES: [(Auth, &str); 2] = [
    (Auth::BetterAuth, "Better Auth (recommended)"),
    (Auth::None, "None - I'll handle auth myself"),
];

const EXAMPLE_CHOICES: [(Example, &str); 2] = [
    (Example::Todo, "Placeholder for a todo app"),
    (Example::Blog, "Placeholder for a blog app"),
];

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for free text, offering `default`.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
    /// Asks for one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
    /// Asks for any subset of `items`, returning their indices.
    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(default).interact()?)
    }

    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>> {
        Ok(MultiSelect::new().with_prompt(prompt).items(items).interact()?)
    }
}

fn choose<T: Copy>(
    prompter: &dyn Prompter,
    prompt: &str,
    choices: &[(T, &str)],
    default: usize,
) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
    let index = prompter.select(prompt, &labels, default)?;
    choices
        .get(index)
        .map(|(value, _)| *value)
        .ok_or_else(|| Error::PromptError(format!("selection {index} is out of range")))
}

fn project_name(args: &Args, prompter: &dyn Prompter) -> Result<String> {
    match &args.project_name {
        Some(name) => Ok(name.clone()),
        None if args.yes => Err(Error::MissingArgument { flag: "PROJECT_NAME".to_string() }),
        None => {
            let name = prompter.input("What is your project named?", DEFAULT_PROJECT_NAME)?;
            Ok(name.trim().to_string())
        }
    }
}

/// Builds the ProjectConfig for a run.
///
/// Flags win over prompts. With `--yes`, every unset option falls back to
/// its default without prompting, and options that have no default fail.
/// The project directory is resolved against `cwd`, which is also where
/// the package manager is detected from lockfiles.
pub fn gather_config<P: AsRef<Path>>(
    args: &Args,
    prompter: &dyn Prompter,
    cwd: P,
) -> Result<ProjectConfig> {
    let cwd = cwd.as_ref();
    let name = project_name(args, prompter)?;
    let mut config = ProjectConfig::new(name, cwd);

    config.database = match args.database {
        Some(database) => database,
        None if args.yes => Database::default(),
        None => choose(prompter, "What database would you like to use?", &DATABASE_CHOICES, 0)?,
    };

    config.auth = match args.auth {
        Some(auth) => auth,
        None if args.yes => Auth::default(),
        None => choose(
            prompter,
            "What authentication provider would you like to use?",
            &AUTH_CHOICES,
            0,
        )?,
    };

    let examples = match &args.examples {
        Some(examples) => examples.clone(),
        None if args.yes => Vec::new(),
        None => {
            let labels: Vec<&str> = EXAMPLE_CHOICES.iter().map(|(_, label)| *label).collect();
            prompter
                .multi_select("Would you like to include any example templates?", &labels)?
                .into_iter()
                .filter_map(|index| EXAMPLE_CHOICES.get(index).map(|(example, _)| *example))
                .collect()
        }
    };
    config = config.with_examples(examples);

    config.git = !args.no_git;
    config.install = !args.no_install;
    config.package_manager = args.package_manager.unwrap_or_else(|| detect_package_manager(cwd));

    debug!("Gathered configuration: {:?}", config);
    Ok(config)
}
