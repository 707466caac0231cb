use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

use crate::{
    constants::{SQL_EXTENSION, TYPED_DIRS},
    error::SanityError,
    types::SourceSet,
};

/// Collects the `.sql` files of every category directory under `root`.
///
/// Each category is walked in file name order so repeated runs hand the
/// resolver the same input order.
pub fn collect_sources(root: &Path) -> Result<SourceSet, SanityError> {
    debug!("Collecting sql files under {}", root.display());
    let mut sources = SourceSet::new(root.to_path_buf());

    for category in TYPED_DIRS {
        let dir = root.join(category.dir_name());
        if !dir.is_dir() {
            trace!("No {}/ directory, skipping", category.dir_name());
            continue;
        }

        let mut files: Vec<String> = Vec::new();
        // Every sql file in a category is loaded, ignore files included.
        let walker = WalkBuilder::new(&dir)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for res in walker {
            let dent = res?;
            let p = dent.path();
            if !p.is_file() {
                continue;
            }
            if p.extension().and_then(|e| e.to_str()) != Some(SQL_EXTENSION) {
                trace!("Skipping non-sql file: {}", p.display());
                continue;
            }
            trace!("Found {} file: {}", category.dir_name(), p.display());
            files.push(p.to_string_lossy().to_string());
        }

        debug!("Collected {} files from {}/", files.len(), category.dir_name());
        sources.insert(*category, files);
    }

    debug!("Collected {} sql files", sources.len());
    Ok(sources)
}
