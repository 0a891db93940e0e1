//! create-simple-ai scaffolds full-stack Next.js applications.
//! It renders a bundled template tree into a new project directory, layering
//! feature areas (UI kit, styling, database, auth, API, linting) on top of a
//! base scaffold, and removes the directory again if any step fails.

/// Command-line interface module
pub mod cli;

/// Project configuration, option enums and ambient lookups
pub mod config;

/// Common constants
pub mod constants;

/// Context Builder: derives template variables from the configuration
pub mod context;

/// Dependency installation through the package manager
pub mod deps;

/// Error types and handling
pub mod error;

/// Git repository initialization
pub mod git;

/// Files never copied from a template tree
pub mod ignore;

/// Ordered installer set, one installer per feature area
pub mod installers;

/// `package.json` editing
pub mod manifest;

/// Template tree processing: rendering and verbatim copies
pub mod processor;

/// Interactive and non-interactive configuration gathering
pub mod prompt;

/// Template language evaluation
pub mod renderer;

/// Setup orchestration with cleanup on failure
pub mod setup;

/// Configuration checks run before anything is created
pub mod validation;

/// Pinned package versions
pub mod versions;
