//! Edits to the generated `package.json`.
//! The base templates write the manifest; installers then merge in the
//! dependencies and scripts of their feature area.

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::versions::VersionCatalog;
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Dependencies and scripts one installer adds to the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPatch {
    pub dependencies: Vec<(String, String)>,
    pub dev_dependencies: Vec<(String, String)>,
    pub scripts: Vec<(String, String)>,
}

impl ManifestPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a runtime dependency pinned from `versions`.
    pub fn dependency(mut self, versions: &VersionCatalog, package: &str) -> Result<Self> {
        let version = versions.require(package)?;
        self.dependencies.push((package.to_string(), version.to_string()));
        Ok(self)
    }

    /// Adds a development dependency pinned from `versions`.
    pub fn dev_dependency(mut self, versions: &VersionCatalog, package: &str) -> Result<Self> {
        let version = versions.require(package)?;
        self.dev_dependencies.push((package.to_string(), version.to_string()));
        Ok(self)
    }

    pub fn script<N: Into<String>, C: Into<String>>(mut self, name: N, command: C) -> Self {
        self.scripts.push((name.into(), command.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty() && self.scripts.is_empty()
    }
}

pub fn read_manifest<P: AsRef<Path>>(project_dir: P) -> Result<Value> {
    let path = project_dir.as_ref().join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes the manifest with two-space indentation and a trailing newline.
pub fn write_manifest<P: AsRef<Path>>(project_dir: P, manifest: &Value) -> Result<()> {
    let path = project_dir.as_ref().join(MANIFEST_FILE);
    let mut content = serde_json::to_string_pretty(manifest)?;
    content.push('\n');
    fs::write(path, content).map_err(Error::IoError)
}

fn section<'m>(manifest: &'m mut Map<String, Value>, key: &str) -> Result<&'m mut Map<String, Value>> {
    manifest
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| Error::ConfigError(format!("'{key}' in {MANIFEST_FILE} is not an object")))
}

fn merge_sorted(target: &mut Map<String, Value>, entries: &[(String, String)]) {
    for (name, version) in entries {
        target.insert(name.clone(), Value::String(version.clone()));
    }
    let mut sorted: Vec<(String, Value)> = std::mem::take(target).into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    target.extend(sorted);
}

/// Merges `patch` into an in-memory manifest.
///
/// Dependency maps stay alphabetically sorted, matching what package
/// managers write. Scripts keep their insertion order.
pub fn apply_patch(manifest: &mut Value, patch: &ManifestPatch) -> Result<()> {
    let manifest = manifest
        .as_object_mut()
        .ok_or_else(|| Error::ConfigError(format!("{MANIFEST_FILE} is not a JSON object")))?;

    if !patch.dependencies.is_empty() {
        merge_sorted(section(manifest, "dependencies")?, &patch.dependencies);
    }
    if !patch.dev_dependencies.is_empty() {
        merge_sorted(section(manifest, "devDependencies")?, &patch.dev_dependencies);
    }
    if !patch.scripts.is_empty() {
        let scripts = section(manifest, "scripts")?;
        for (name, command) in &patch.scripts {
            scripts.insert(name.clone(), Value::String(command.clone()));
        }
    }
    Ok(())
}

/// Reads, patches and rewrites the manifest in `project_dir`.
pub fn update_manifest<P: AsRef<Path>>(project_dir: P, patch: &ManifestPatch) -> Result<()> {
    if patch.is_empty() {
        return Ok(());
    }
    let project_dir = project_dir.as_ref();
    let mut manifest = read_manifest(project_dir)?;
    apply_patch(&mut manifest, patch)?;
    debug!(
        "Updated {}: {} dependencies, {} dev dependencies, {} scripts",
        MANIFEST_FILE,
        patch.dependencies.len(),
        patch.dev_dependencies.len(),
        patch.scripts.len()
    );
    write_manifest(project_dir, &manifest)
}
