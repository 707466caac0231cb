use serde::Serialize;
use std::path::PathBuf;

use crate::constants::LOAD_ORDER;

/// One input file and the dependency identifiers it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    /// Ordered, first occurrence wins, never contains duplicates.
    pub dependencies: Vec<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, dependencies: impl IntoIterator<Item = String>) -> Self {
        let mut source = SourceFile { path: path.into(), dependencies: Vec::new() };
        for dependency in dependencies {
            push_unique(&mut source.dependencies, dependency);
        }
        source
    }
}

/// Appends `dependency` unless already listed. Returns whether it was added.
pub(crate) fn push_unique(dependencies: &mut Vec<String>, dependency: String) -> bool {
    if dependencies.contains(&dependency) {
        return false;
    }
    dependencies.push(dependency);
    true
}

/// Typed subdirectories of the SQL root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Functions,
    Triggers,
    Types,
    Views,
}

impl Category {
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Functions => "functions",
            Category::Triggers => "triggers",
            Category::Types => "types",
            Category::Views => "views",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    pub root: PathBuf,
    pub(crate) by_category: Vec<(Category, Vec<String>)>,
}

impl SourceSet {
    pub fn new(root: PathBuf) -> Self {
        SourceSet { root, by_category: Vec::new() }
    }

    pub fn insert(&mut self, category: Category, files: Vec<String>) {
        match self.by_category.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(files),
            None => self.by_category.push((category, files)),
        }
    }

    pub fn files(&self, category: Category) -> &[String] {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, files)| files.as_slice())
            .unwrap_or(&[])
    }

    /// All files, categories in load order.
    pub fn all(&self) -> Vec<String> {
        LOAD_ORDER.iter().flat_map(|c| self.files(*c).iter().cloned()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_category.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadPlan {
    pub root: String,
    pub files: Vec<String>,
}
