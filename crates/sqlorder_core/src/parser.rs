use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;

use crate::{
    error::ResolveError,
    types::{SourceFile, push_unique},
};

/// Pattern for `-- require 'path'` or `-- require "path"` declarations
static REQUIRE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"--[ \t]+require[ \t]+(?:'([^'\r\n]*)'|"([^"\r\n]*)")"#).unwrap()
});

/// Returns the dependency identifiers declared in `content`, in declaration order.
///
/// Each identifier is `base + "/" + path`. Repeated declarations are dropped.
pub fn dependencies_in(content: &str, base: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();

    for caps in REQUIRE_PATTERN.captures_iter(content) {
        let Some(rel) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let dependency = format!("{}/{}", base, rel.as_str());
        if push_unique(&mut dependencies, dependency) {
            trace!("Found require: '{}'", rel.as_str());
        } else {
            trace!("Ignoring duplicate require: '{}'", rel.as_str());
        }
    }

    dependencies
}

impl SourceFile {
    /// Reads `path` and extracts its declared dependencies.
    pub fn load(path: &str, base: &str) -> Result<SourceFile, ResolveError> {
        trace!("Parsing file for requires: {}", path);
        let content = fs::read_to_string(path)
            .map_err(|source| ResolveError::Io { path: path.to_string(), source })?;

        let dependencies = dependencies_in(&content, base);
        debug!("Found {} dependencies in {}", dependencies.len(), path);
        Ok(SourceFile { path: path.to_string(), dependencies })
    }
}
