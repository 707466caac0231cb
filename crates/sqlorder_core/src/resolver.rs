use log::{debug, trace, warn};
use std::{collections::HashSet, mem};

use crate::{error::ResolveError, types::SourceFile};

/// Sorts `files` so that every file comes after the files it requires.
///
/// Dependencies are read from each file as it is reached, and identifiers are
/// built against `base`. The first read failure aborts the run.
pub fn resolve_dependencies(files: &[String], base: &str) -> Result<Vec<String>, ResolveError> {
    debug!("Resolving dependencies of {} files in {}", files.len(), base);
    let mut resolver = DependencyResolver::new(base);
    for file in files {
        resolver.add(SourceFile::load(file, base)?);
    }
    resolver.finish()
}

/// State of one resolution run.
///
/// Files are fed in caller order through [`DependencyResolver::add`]; those whose
/// dependencies are all placed go straight to the sorted list, the others wait in
/// the pending list until [`DependencyResolver::finish`] settles them.
#[derive(Debug)]
pub struct DependencyResolver {
    base: String,
    sorted: Vec<String>,
    placed: HashSet<String>,
    pending: Vec<SourceFile>,
}

impl DependencyResolver {
    pub fn new(base: impl Into<String>) -> Self {
        DependencyResolver {
            base: base.into(),
            sorted: Vec::new(),
            placed: HashSet::new(),
            pending: Vec::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn sorted(&self) -> &[String] {
        &self.sorted
    }

    pub fn pending(&self) -> &[SourceFile] {
        &self.pending
    }

    /// Initial pass step for one file.
    pub fn add(&mut self, source: SourceFile) {
        if self.placed.contains(&source.path) {
            warn!("{} was supplied more than once, keeping its first position", source.path);
            return;
        }

        if self.is_resolved(&source) {
            trace!("Resolved on arrival: {}", source.path);
            self.pending.retain(|p| p.path != source.path);
            self.place(source);
            self.process_pending();
        } else {
            trace!("Parking {} ({} dependencies)", source.path, source.dependencies.len());
            self.pending.push(source);
        }
    }

    /// Runs the bounded stabilization scans and returns the final order.
    pub fn finish(mut self) -> Result<Vec<String>, ResolveError> {
        let rounds = self.pending.len();
        if rounds > 0 {
            debug!("{} files pending after initial pass", rounds);
        }

        for round in 0..rounds {
            self.process_pending();
            trace!("Round {}: {} files still pending", round + 1, self.pending.len());
            if self.pending.is_empty() {
                break;
            }
        }

        if !self.pending.is_empty() {
            for source in &self.pending {
                debug!("Unresolved: {} requires {:?}", source.path, source.dependencies);
            }
            return Err(ResolveError::CircularDependency { base: self.base });
        }

        debug!("Resolved load order of {} files", self.sorted.len());
        Ok(self.sorted)
    }

    /// One front-to-back scan of the pending list.
    ///
    /// Files placed earlier in the scan count as resolved for the entries after them.
    fn process_pending(&mut self) {
        let pending = mem::take(&mut self.pending);
        for source in pending {
            if self.is_resolved(&source) {
                trace!("Resolved from pending: {}", source.path);
                self.place(source);
            } else {
                self.pending.push(source);
            }
        }
    }

    fn is_resolved(&self, source: &SourceFile) -> bool {
        source.dependencies.iter().all(|d| self.placed.contains(d))
    }

    fn place(&mut self, source: SourceFile) {
        if self.placed.insert(source.path.clone()) {
            self.sorted.push(source.path);
        }
    }
}
