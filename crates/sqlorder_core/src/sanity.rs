use log::{debug, info};
use std::path::Path;

use crate::{collector::collect_sources, constants::TYPED_DIRS, error::SanityError, types::SourceSet};

/// Makes sure `root` is ready to be loaded and returns the sql files found in it.
pub fn check(root: &Path) -> Result<SourceSet, SanityError> {
    directory_exists(root)?;
    typed_dir_exists(root)?;
    let sources = collect_sources(root)?;
    sql_files_present(root, &sources)?;

    info!("Found {} sql files in {}", sources.len(), root.display());
    Ok(sources)
}

fn directory_exists(root: &Path) -> Result<(), SanityError> {
    if !root.is_dir() {
        return Err(SanityError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

fn typed_dir_exists(root: &Path) -> Result<(), SanityError> {
    let found: Vec<&str> = TYPED_DIRS
        .iter()
        .map(|c| c.dir_name())
        .filter(|name| root.join(name).is_dir())
        .collect();
    debug!("Typed directories present: {:?}", found);

    if found.is_empty() {
        return Err(SanityError::NoTypedDirectory(root.to_path_buf()));
    }
    Ok(())
}

// No need to go any further without anything to load.
fn sql_files_present(root: &Path, sources: &SourceSet) -> Result<(), SanityError> {
    if sources.is_empty() {
        return Err(SanityError::NoSourceFiles(root.to_path_buf()));
    }
    Ok(())
}
