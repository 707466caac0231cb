use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Also raised when a declared dependency matches no input file.
    #[error("Can't resolve dependencies in {base}. Circular dependencies?")]
    CircularDependency { base: String },
}

#[derive(Error, Debug)]
pub enum SanityError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No functions/, triggers/, types/ or views/ directory found in {}", .0.display())]
    NoTypedDirectory(PathBuf),

    #[error("Didn't find any sql file in {}", .0.display())]
    NoSourceFiles(PathBuf),

    #[error("Failed to scan sql files: {0}")]
    Walk(#[from] ignore::Error),
}
