//! Template tree processing.
//! Mirrors a template directory into a destination directory, rendering
//! `.j2` files through the template renderer and copying everything else
//! byte-for-byte.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{BINARY_EXTENSIONS, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::ignore::default_ignore_set;
use crate::renderer::TemplateRenderer;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Returns true when `filename` ends in the render marker and has a name before it.
pub fn is_template_path(filename: &str) -> bool {
    filename
        .strip_suffix(TEMPLATE_SUFFIX)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some_and(|stem| !stem.is_empty())
}

/// Returns true when the extension is on the binary passthrough list.
pub fn is_binary_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Removes the render marker from the final path component, if present.
pub fn strip_template_suffix<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let filename = path.file_name()?.to_str()?;
    if !is_template_path(filename) {
        return None;
    }
    let stripped = &filename[..filename.len() - TEMPLATE_SUFFIX.len() - 1];
    Some(path.with_file_name(stripped))
}

/// Maps a path relative to a template root onto `target_dir`.
///
/// # Returns
/// * the destination path, with the render marker stripped
/// * whether the source is template source
pub fn resolve_target_path<P: AsRef<Path>, T: AsRef<Path>>(
    relative_path: P,
    target_dir: T,
) -> (PathBuf, bool) {
    let relative_path = relative_path.as_ref();
    let target_dir = target_dir.as_ref();
    match strip_template_suffix(relative_path) {
        Some(stripped) => (target_dir.join(stripped), true),
        None => (target_dir.join(relative_path), false),
    }
}

/// Renders files and trees of files against a context.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    ignored: GlobSet,
}

impl<'a> Processor<'a> {
    /// Creates a processor that skips the default ignore patterns.
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Result<Self> {
        Ok(Self::with_ignored(renderer, default_ignore_set()?))
    }

    pub fn with_ignored(renderer: &'a dyn TemplateRenderer, ignored: GlobSet) -> Self {
        Self { renderer, ignored }
    }

    /// Renders or copies a single file.
    ///
    /// Binary files and files without the render marker are copied verbatim to
    /// `dest`. Template files are rendered and written to `dest` minus its
    /// render marker. Parent directories are created as needed and an
    /// existing destination file is overwritten. Render errors name the
    /// source by its file name, its path relative to its own directory.
    ///
    /// # Returns
    /// * the path that was written
    pub fn render_file<S: AsRef<Path>, D: AsRef<Path>>(
        &self,
        source: S,
        dest: D,
        context: &serde_json::Value,
    ) -> Result<PathBuf> {
        let source = source.as_ref();
        let dest = dest.as_ref();
        let filename = source.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        if is_binary_path(source) || !is_template_path(filename) {
            return self.process_file(source, dest, None, context);
        }
        let target = strip_template_suffix(dest).unwrap_or_else(|| dest.to_path_buf());
        self.process_file(source, &target, Some(filename), context)
    }

    /// Renders every file under `source_dir` into the mirrored location under `dest_dir`.
    ///
    /// A missing `source_dir` is not an error: nothing is rendered and the
    /// destination is left untouched.
    ///
    /// # Returns
    /// * number of files written
    pub fn render_tree<S: AsRef<Path>, D: AsRef<Path>>(
        &self,
        source_dir: S,
        dest_dir: D,
        context: &serde_json::Value,
    ) -> Result<usize> {
        let source_dir = source_dir.as_ref();
        let dest_dir = dest_dir.as_ref();

        if !source_dir.exists() {
            debug!("Template directory {} does not exist, skipping", source_dir.display());
            return Ok(0);
        }

        debug!("Processing template {} -> {}", source_dir.display(), dest_dir.display());

        let mut written = 0;
        for entry in WalkDir::new(source_dir) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative_path = path
                .strip_prefix(source_dir)
                .map_err(|e| Error::ConfigError(e.to_string()))?;

            if self.ignored.is_match(relative_path) {
                debug!("Skipping ignored file {}", relative_path.display());
                continue;
            }

            let (target_path, is_template) = resolve_target_path(relative_path, dest_dir);
            let name = is_template.then(|| relative_path.display().to_string());
            self.process_file(path, &target_path, name.as_deref(), context)?;
            written += 1;
        }

        Ok(written)
    }

    /// Copies `source` to `target`, or renders it there when `template_name` is set.
    fn process_file(
        &self,
        source: &Path,
        target: &Path,
        template_name: Option<&str>,
        context: &serde_json::Value,
    ) -> Result<PathBuf> {
        match template_name {
            None => {
                debug!("Copying file: {}", target.display());
                copy_file(source, target)?;
            }
            Some(name) => {
                debug!("Writing file: {}", target.display());
                let content = fs::read_to_string(source)?;
                let rendered = self.renderer.render(name, &content, context)?;
                write_file(target, &rendered)?;
            }
        }
        Ok(target.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_template_suffix() {
        assert_eq!(
            strip_template_suffix("lib/db/schema.ts.j2"),
            Some(PathBuf::from("lib/db/schema.ts"))
        );
        assert_eq!(strip_template_suffix("lib/db/schema.ts"), None);
        assert_eq!(strip_template_suffix("j2"), None);
    }

    #[test]
    fn test_is_binary_path() {
        assert!(is_binary_path("public/logo.png"));
        assert!(is_binary_path("app/favicon.ICO"));
        assert!(is_binary_path("public/next.svg"));
        assert!(!is_binary_path("app/page.tsx"));
        assert!(!is_binary_path("Makefile"));
    }
}
