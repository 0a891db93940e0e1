//! Files that are never carried from a template tree into a project,
//! such as editor and operating system droppings.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Patterns matched against paths relative to a template tree root.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/.DS_Store", "**/Thumbs.db", "**/*.swp"];

/// Compiles `patterns` into a GlobSet.
pub fn build_ignore_set(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::ConfigError(format!("invalid ignore pattern '{pattern}': {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::ConfigError(format!("ignore patterns: {e}")))
}

pub fn default_ignore_set() -> Result<GlobSet> {
    build_ignore_set(DEFAULT_IGNORE_PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignore_set() {
        let set = default_ignore_set().unwrap();
        assert!(set.is_match(".DS_Store"));
        assert!(set.is_match("app/.DS_Store"));
        assert!(set.is_match("lib/db/.schema.ts.swp"));
        assert!(!set.is_match("app/page.tsx"));
    }
}
