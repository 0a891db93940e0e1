//! Error handling for create-simple-ai.
//! Defines the error taxonomy and the result alias used throughout the crate.

use thiserror::Error;

/// Errors that can occur while configuring or scaffolding a project.
///
/// Configuration variants are raised before anything touches the filesystem.
/// Everything else may surface from the middle of a setup run, after which
/// the orchestrator removes the partially created project directory and
/// returns the error unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name failed the name-safety rules.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    /// The destination already exists and has contents.
    #[error("Directory '{output_dir}' already exists and is not empty. Please choose a different name or remove the directory.")]
    OutputDirectoryNotEmpty { output_dir: String },

    /// A value required in non-interactive mode was not supplied.
    #[error("Missing required argument: {flag}. It has no default when running with --yes.")]
    MissingArgument { flag: String },

    /// Represents any other invalid configuration value
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A template subtree that an installer depends on is absent.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateNotFound { template_dir: String },

    /// Template source failed to compile or evaluate.
    #[error("Failed to render template '{path}': {source}.")]
    RenderError {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents errors while reading or writing JSON manifests
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors raised by libgit2
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {reason}.")]
    CommandError { command: String, reason: String },

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with create-simple-ai's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
