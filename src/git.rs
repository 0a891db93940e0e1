//! Git repository initialization for generated projects.

use crate::constants::CLI_NAME;
use crate::error::Result;
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use log::{debug, info};
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "main";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-simple-ai";

/// Turns a project directory into a version-controlled repository.
pub trait GitInitializer {
    fn init(&self, project_dir: &Path) -> Result<()>;
}

/// libgit2-backed initializer that also records an initial commit.
#[derive(Debug, Clone)]
pub struct Git2Initializer {
    branch: String,
    commit_message: String,
}

impl Git2Initializer {
    pub fn new() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: INITIAL_COMMIT_MESSAGE.to_string(),
        }
    }

    pub fn with_branch<S: Into<String>>(mut self, branch: S) -> Self {
        self.branch = branch.into();
        self
    }
}

impl Default for Git2Initializer {
    fn default() -> Self {
        Git2Initializer::new()
    }
}

/// Identity from the user's git configuration, or the tool's own.
fn signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(signature) => Ok(signature),
        Err(e) => {
            debug!("No git identity configured ({}), using fallback", e.message());
            Ok(Signature::now(CLI_NAME, &format!("{CLI_NAME}@users.noreply.localhost"))?)
        }
    }
}

impl GitInitializer for Git2Initializer {
    fn init(&self, project_dir: &Path) -> Result<()> {
        if project_dir.join(".git").exists() {
            debug!("Git repository already exists at {}", project_dir.display());
            return Ok(());
        }

        info!("Initializing git repository in {}", project_dir.display());

        let mut options = RepositoryInitOptions::new();
        options.initial_head(&self.branch);
        let repo = Repository::init_opts(project_dir, &options)?;

        let mut index = repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.write()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let author = signature(&repo)?;
        repo.commit(Some("HEAD"), &author, &author, &self.commit_message, &tree, &[])?;

        debug!("Created initial commit on '{}'", self.branch);
        Ok(())
    }
}
