use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    config::Config,
    resolver::resolve_dependencies,
    sanity,
    types::{LoadPlan, SourceSet},
};

/// Runs the preflight checks only.
pub fn run_check(mut cfg: Config) -> Result<SourceSet> {
    cfg.initialize()?;
    let root = cfg.root()?;
    let sources = sanity::check(root)?;
    Ok(sources)
}

/// Checks the sql root, then sorts every file found in it by its requires.
pub fn build_load_plan(mut cfg: Config) -> Result<LoadPlan> {
    info!("Building load plan");

    cfg.initialize()?;
    let root = cfg.root()?;
    let sources = sanity::check(root)?;

    let base = root.to_string_lossy().to_string();
    let files = sources.all();
    debug!("Resolving {} files against base {}", files.len(), base);

    let sorted = resolve_dependencies(&files, &base)
        .with_context(|| format!("Failed to order sql files in {}", base))?;
    info!("Load plan ready with {} files", sorted.len());

    Ok(LoadPlan { root: base, files: sorted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ResolveError, SanityError};
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config(root: &Path) -> Config {
        Config { root: Some(root.to_path_buf()) }
    }

    fn relative(plan: &LoadPlan) -> Vec<String> {
        plan.files
            .iter()
            .map(|f| f.strip_prefix(&plan.root).unwrap().trim_start_matches('/').to_string())
            .collect()
    }

    #[test]
    fn test_view_loads_after_table_function() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "views/active_users.sql", "-- require 'functions/is_active.sql'\n");
        create_test_file(root, "functions/is_active.sql", "-- require 'types/status.sql'\n");
        create_test_file(root, "functions/age.sql", "SELECT 1;");
        create_test_file(root, "types/status.sql", "CREATE TYPE status AS ENUM ('on', 'off');");
        create_test_file(root, "triggers/audit.sql", "-- require \"views/active_users.sql\"\n");

        let plan = build_load_plan(config(root)).unwrap();
        assert_eq!(
            relative(&plan),
            vec![
                "types/status.sql",
                "functions/age.sql",
                "functions/is_active.sql",
                "views/active_users.sql",
                "triggers/audit.sql",
            ]
        );
    }

    #[test]
    fn test_cross_category_requires_respected() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // A type that depends on a function must move behind it.
        create_test_file(root, "types/a.sql", "-- require 'functions/f.sql'");
        create_test_file(root, "functions/f.sql", "");

        let plan = build_load_plan(config(root)).unwrap();
        assert_eq!(relative(&plan), vec!["functions/f.sql", "types/a.sql"]);
    }

    #[test]
    fn test_gitignored_dependency_is_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        create_test_file(root, ".gitignore", "functions/generated.sql\n");
        create_test_file(root, "functions/generated.sql", "CREATE FUNCTION gen() RETURNS int;");
        create_test_file(root, "views/v.sql", "-- require 'functions/generated.sql'");

        let plan = build_load_plan(config(root)).unwrap();
        assert_eq!(relative(&plan), vec!["functions/generated.sql", "views/v.sql"]);
    }

    #[test]
    fn test_cycle_surfaces_resolve_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "views/a.sql", "-- require 'views/b.sql'");
        create_test_file(root, "views/b.sql", "-- require 'views/a.sql'");

        let err = build_load_plan(config(root)).unwrap_err();
        let resolve_err = err.downcast_ref::<ResolveError>().unwrap();
        assert!(matches!(resolve_err, ResolveError::CircularDependency { .. }));
    }

    #[test]
    fn test_sanity_failure_stops_before_resolving() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "notes.txt", "");

        let err = build_load_plan(config(temp_dir.path())).unwrap_err();
        assert!(matches!(err.downcast_ref::<SanityError>(), Some(SanityError::NoTypedDirectory(_))));
    }

    #[test]
    fn test_run_check_counts_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "views/a.sql", "");
        create_test_file(root, "views/b.sql", "");

        let sources = run_check(config(root)).unwrap();
        assert_eq!(sources.len(), 2);
    }
}
