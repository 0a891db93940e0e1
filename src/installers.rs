//! The installer set.
//!
//! Each installer materializes one feature area of the generated project by
//! rendering its template subtree and merging its packages into the manifest.
//! Installers run in [`REGISTRY`] order, so a later installer may overwrite or
//! extend files written by an earlier one:
//!
//! 1. `nextjs` - framework scaffold
//! 2. `shadcn` - UI kit configuration
//! 3. `tailwind` - styling configuration
//! 4. `drizzle` - database layer, when a database is selected
//! 5. `better-auth` - authentication, when an auth provider is selected
//! 6. `hono` - API layer
//! 7. `examples` - one subtree per selected example
//! 8. `biome` - lint and format configuration
//!
//! Installers never clean up after themselves; a failure is returned as-is
//! and the orchestrator removes the whole project directory.

use crate::config::{Auth, Database, ProjectConfig};
use crate::constants::{EXAMPLE_TEMPLATES_DIR, FRAMEWORK_TEMPLATES_DIR, LIBRARY_TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::manifest::{update_manifest, ManifestPatch};
use crate::processor::Processor;
use crate::versions::VersionCatalog;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One feature area of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installer {
    NextJs,
    Shadcn,
    Tailwind,
    Drizzle,
    BetterAuth,
    Hono,
    Examples,
    Biome,
}

/// Every installer, in invocation order.
pub const REGISTRY: [Installer; 8] = [
    Installer::NextJs,
    Installer::Shadcn,
    Installer::Tailwind,
    Installer::Drizzle,
    Installer::BetterAuth,
    Installer::Hono,
    Installer::Examples,
    Installer::Biome,
];

/// Everything an installer reads while it runs.
pub struct InstallContext<'a> {
    pub config: &'a ProjectConfig,
    pub template_root: &'a Path,
    pub processor: &'a Processor<'a>,
    pub context: &'a serde_json::Value,
    pub versions: &'a VersionCatalog,
}

impl fmt::Display for Installer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Installer {
    pub fn name(&self) -> &'static str {
        match self {
            Installer::NextJs => "nextjs",
            Installer::Shadcn => "shadcn",
            Installer::Tailwind => "tailwind",
            Installer::Drizzle => "drizzle",
            Installer::BetterAuth => "better-auth",
            Installer::Hono => "hono",
            Installer::Examples => "examples",
            Installer::Biome => "biome",
        }
    }

    /// Whether this installer takes part in a run for `config`.
    pub fn is_selected(&self, config: &ProjectConfig) -> bool {
        match self {
            Installer::Drizzle => config.database != Database::None,
            Installer::BetterAuth => config.auth != Auth::None,
            Installer::Examples => !config.examples.is_empty(),
            Installer::NextJs
            | Installer::Shadcn
            | Installer::Tailwind
            | Installer::Hono
            | Installer::Biome => true,
        }
    }

    /// Template subtree this installer must find under the template root.
    ///
    /// `None` for the examples installer, whose subtrees are optional.
    pub fn template_dir(&self, template_root: &Path) -> Option<PathBuf> {
        let dir = match self {
            Installer::NextJs => template_root.join(FRAMEWORK_TEMPLATES_DIR).join("nextjs"),
            Installer::Examples => return None,
            _ => template_root.join(LIBRARY_TEMPLATES_DIR).join(self.name()),
        };
        Some(dir)
    }

    /// Packages and scripts this installer adds to the manifest.
    pub fn manifest_patch(
        &self,
        config: &ProjectConfig,
        versions: &VersionCatalog,
    ) -> Result<ManifestPatch> {
        let patch = ManifestPatch::new();
        match self {
            Installer::NextJs | Installer::Examples => Ok(patch),
            Installer::Shadcn => patch
                .dependency(versions, "class-variance-authority")?
                .dependency(versions, "clsx")?
                .dependency(versions, "lucide-react")?
                .dependency(versions, "tailwind-merge")?
                .dependency(versions, "tailwindcss-animate"),
            Installer::Tailwind => patch
                .dev_dependency(versions, "tailwindcss")?
                .dev_dependency(versions, "postcss")?
                .dev_dependency(versions, "autoprefixer"),
            Installer::Drizzle => {
                let patch = patch
                    .dependency(versions, "drizzle-orm")?
                    .dev_dependency(versions, "drizzle-kit")?
                    .dev_dependency(versions, "dotenv")?
                    .script("db:generate", "drizzle-kit generate")
                    .script("db:migrate", "drizzle-kit migrate")
                    .script("db:studio", "drizzle-kit studio");
                match config.database {
                    Database::Postgres => {
                        patch.dependency(versions, "pg")?.dev_dependency(versions, "@types/pg")
                    }
                    Database::Mysql => patch.dependency(versions, "mysql2"),
                    Database::Sqlite => patch.dependency(versions, "@libsql/client"),
                    Database::None => Ok(patch),
                }
            }
            Installer::BetterAuth => patch.dependency(versions, "better-auth"),
            Installer::Hono => patch.dependency(versions, "hono"),
            Installer::Biome => Ok(patch
                .dev_dependency(versions, "@biomejs/biome")?
                .script("lint", "biome check .")
                .script("format", "biome format --write .")),
        }
    }

    /// Materializes this feature area into the project directory.
    pub fn run(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let project_dir = &ctx.config.project_dir;

        match self.template_dir(ctx.template_root) {
            Some(template_dir) => {
                if !template_dir.is_dir() {
                    return Err(Error::TemplateNotFound {
                        template_dir: template_dir.display().to_string(),
                    });
                }
                let written = ctx.processor.render_tree(&template_dir, project_dir, ctx.context)?;
                debug!("{}: {} files written", self, written);
            }
            None => {
                for example in &ctx.config.examples {
                    let example_dir =
                        ctx.template_root.join(EXAMPLE_TEMPLATES_DIR).join(example.as_str());
                    let written =
                        ctx.processor.render_tree(&example_dir, project_dir, ctx.context)?;
                    debug!("{} '{}': {} files written", self, example, written);
                }
            }
        }

        if *self == Installer::Shadcn {
            // Generated UI components are added here by the shadcn CLI later.
            fs::create_dir_all(project_dir.join("components").join("ui"))?;
        }

        update_manifest(project_dir, &self.manifest_patch(ctx.config, ctx.versions)?)
    }
}

/// The installers that run for `config`, in registry order.
pub fn selected_installers(config: &ProjectConfig) -> Vec<Installer> {
    REGISTRY.iter().copied().filter(|installer| installer.is_selected(config)).collect()
}

/// Runs `installers` one after another, stopping at the first failure.
pub fn run_installers(installers: &[Installer], ctx: &InstallContext<'_>) -> Result<()> {
    for installer in installers {
        info!("Setting up {installer}...");
        installer.run(ctx)?;
    }
    Ok(())
}
