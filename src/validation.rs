//! Checks applied to a ProjectConfig before anything is written to disk.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::fs;

/// Longest accepted project name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Names that collide with tooling directories.
pub const RESERVED_NAMES: [&str; 1] = ["node_modules"];

/// Characters that are unsafe in a path on at least one supported platform.
const INVALID_CHARS_PATTERN: &str = r#"[<>:"|?*]"#;

fn invalid_name(name: &str, reason: &str) -> Error {
    Error::InvalidProjectName { name: name.to_string(), reason: reason.to_string() }
}

/// Applies the name-safety rules to `name`.
///
/// `.` is accepted and means "scaffold into the current directory".
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_name(name, "project name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid_name(name, "project name must be less than 255 characters"));
    }
    if name == "." {
        return Ok(());
    }
    if name.starts_with('.') {
        return Err(invalid_name(name, "project name cannot start with a dot (except for '.')"));
    }
    if name.starts_with('-') {
        return Err(invalid_name(name, "project name cannot start with a dash"));
    }

    let invalid_chars =
        Regex::new(INVALID_CHARS_PATTERN).map_err(|e| Error::ConfigError(e.to_string()))?;
    if invalid_chars.is_match(name) {
        return Err(invalid_name(name, "project name contains invalid characters"));
    }

    let lowercase = name.to_lowercase();
    if RESERVED_NAMES.iter().any(|reserved| *reserved == lowercase) {
        return Err(invalid_name(name, "project name is reserved"));
    }

    Ok(())
}

/// Rejects a destination that already exists with contents.
pub fn validate_project_dir(config: &ProjectConfig) -> Result<()> {
    let project_dir = &config.project_dir;
    if !project_dir.exists() {
        return Ok(());
    }
    if !project_dir.is_dir() {
        return Err(Error::OutputDirectoryNotEmpty {
            output_dir: project_dir.display().to_string(),
        });
    }
    if fs::read_dir(project_dir)?.next().is_some() {
        return Err(Error::OutputDirectoryNotEmpty {
            output_dir: project_dir.display().to_string(),
        });
    }

    debug!("Reusing empty directory {}", project_dir.display());
    Ok(())
}

/// Runs every check. Must succeed before setup begins.
pub fn validate_config(config: &ProjectConfig) -> Result<()> {
    validate_project_name(&config.project_name)?;
    if !config.project_dir.is_absolute() {
        return Err(Error::ConfigError(format!(
            "project directory '{}' must be an absolute path",
            config.project_dir.display()
        )));
    }
    validate_project_dir(config)
}
