//! Dependency installation through the selected package manager.

use crate::config::PackageManager;
use crate::error::{Error, Result};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Installs the dependencies declared in a project's manifest.
pub trait DependencyInstaller {
    fn install(&self, project_dir: &Path, package_manager: PackageManager) -> Result<()>;
}

/// Runs `<package manager> install` with the terminal attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandInstaller;

impl CommandInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl DependencyInstaller for CommandInstaller {
    fn install(&self, project_dir: &Path, package_manager: PackageManager) -> Result<()> {
        let (program, args) = package_manager.install_command();
        let command = format!("{} {}", program, args.join(" "));

        info!("Installing dependencies with {package_manager}...");
        debug!("Running '{}' in {}", command, project_dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandError { command: command.clone(), reason: e.to_string() })?;

        if !status.success() {
            return Err(Error::CommandError { command, reason: format!("exited with {status}") });
        }

        info!("Dependencies installed successfully");
        Ok(())
    }
}
