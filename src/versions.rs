//! Pinned versions of every npm package a generated project may depend on.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

const PINNED_VERSIONS: &[(&str, &str)] = &[
    // framework
    ("next", "15.1.0"),
    ("react", "19.0.0"),
    ("react-dom", "19.0.0"),
    ("typescript", "5.7.2"),
    ("@types/node", "22.10.2"),
    ("@types/react", "19.0.1"),
    ("@types/react-dom", "19.0.2"),
    // ui and styling
    ("class-variance-authority", "0.7.1"),
    ("clsx", "2.1.1"),
    ("lucide-react", "0.468.0"),
    ("tailwind-merge", "2.5.5"),
    ("tailwindcss-animate", "1.0.7"),
    ("tailwindcss", "3.4.17"),
    ("postcss", "8.4.49"),
    ("autoprefixer", "10.4.20"),
    // data layer
    ("drizzle-orm", "0.38.2"),
    ("drizzle-kit", "0.30.1"),
    ("pg", "8.13.1"),
    ("@types/pg", "8.11.10"),
    ("mysql2", "3.11.5"),
    ("@libsql/client", "0.14.0"),
    ("dotenv", "16.4.7"),
    // auth
    ("better-auth", "1.1.4"),
    // api
    ("hono", "4.6.14"),
    // lint
    ("@biomejs/biome", "1.9.4"),
];

/// Flat mapping of package name to pinned semver string.
///
/// Read-only once built; serialized into the template context as `versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    versions: IndexMap<String, String>,
}

impl VersionCatalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_pairs(PINNED_VERSIONS.iter().copied())
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let versions = pairs
            .into_iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect();
        Self { versions }
    }

    pub fn get(&self, package: &str) -> Option<&str> {
        self.versions.get(package).map(String::as_str)
    }

    /// Looks up `package`, failing when it has no pin.
    pub fn require(&self, package: &str) -> Result<&str> {
        self.get(package)
            .ok_or_else(|| Error::ConfigError(format!("no pinned version for package '{package}'")))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl Default for VersionCatalog {
    fn default() -> Self {
        VersionCatalog::bundled()
    }
}
