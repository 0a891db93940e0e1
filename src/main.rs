//! create-simple-ai's main application entry point.
//! Parses arguments, gathers the project configuration and hands it to the
//! setup orchestrator.

use create_simple_ai::{
    cli::{get_args, Args},
    config::{resolve_template_root, ProjectConfig},
    deps::CommandInstaller,
    error::{default_error_handler, Result},
    git::Git2Initializer,
    prompt::{gather_config, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    setup::ProjectSetup,
    versions::VersionCatalog,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_next_steps(config: &ProjectConfig) {
    println!();
    println!("Next steps:");
    if config.project_name != "." {
        println!("  cd {}", config.project_name);
    }
    if !config.install {
        println!("  {} install", config.package_manager);
    }
    println!("  {} dev", config.package_manager.run_command());
}

/// Main application logic execution.
///
/// # Flow
/// 1. Gathers the configuration from flags and prompts
/// 2. Validates it before touching the filesystem
/// 3. Runs the setup, which cleans up after itself on failure
fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let prompter = DialoguerPrompter::new();
    let config = gather_config(&args, &prompter, &cwd)?;

    let template_root = resolve_template_root(args.template_dir);
    let renderer = MiniJinjaRenderer::new();
    let dependencies = CommandInstaller::new();
    let git = Git2Initializer::new();
    let versions = VersionCatalog::bundled();

    println!("Creating a new application in {}.", config.project_dir.display());

    let setup = ProjectSetup::new(&template_root, &renderer, &dependencies, &git, &versions);
    setup.create(&config)?;

    println!("Project created successfully.");
    print_next_steps(&config);
    Ok(())
}
