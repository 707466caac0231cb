use anyhow::{Result, anyhow};
use clap::Args;
use log::{debug, info, trace};
use path_clean::clean;
use std::{env, path::PathBuf};

use crate::constants::DEFAULT_SQL_DIR;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// SQL root holding functions/, triggers/, types/ and views/ (defaults to sql/ under the git root)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl Config {
    /// Resolve the root directory into the form used as the require base
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            clean(r.canonicalize().unwrap_or(r))
        } else {
            let base = match find_git_root() {
                Ok(git_root) => git_root,
                Err(e) => {
                    debug!("{}, falling back to current directory", e);
                    env::current_dir()?
                }
            };
            base.join(DEFAULT_SQL_DIR)
        };
        info!("Using sql root: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        if current_dir.join(".git").exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(anyhow!("Could not find .git directory in any parent folder")),
        }
    }
}
