//! Command-line interface implementation for create-simple-ai.
//! Provides argument parsing using clap.

use crate::config::{Auth, Database, Example, PackageManager};
use crate::constants::CLI_DESCRIPTION;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for create-simple-ai.
#[derive(Parser, Debug)]
#[command(name = "create-simple-ai", version, about = CLI_DESCRIPTION, long_about = None)]
pub struct Args {
    /// Name of the project directory to create ('.' for the current directory)
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Skip prompts and use default options
    #[arg(short, long)]
    pub yes: bool,

    /// Database to configure
    #[arg(short, long, value_enum)]
    pub database: Option<Database>,

    /// Authentication provider
    #[arg(short, long, value_enum)]
    pub auth: Option<Auth>,

    /// Example pages to include, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub examples: Option<Vec<Example>>,

    /// Skip git initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Directory containing the templates to scaffold from
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
