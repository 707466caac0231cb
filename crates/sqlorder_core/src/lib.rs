//! Load ordering for directories of SQL files.
//!
//! Files declare what they need with comment directives:
//!
//! ```sql
//! -- require 'functions/helper.sql'
//! CREATE VIEW report AS SELECT helper();
//! ```
//!
//! This crate provides:
//! - Extracting `require` declarations from file content
//! - Sorting files so each one follows everything it requires
//! - Preflight checks and file collection for a SQL root laid out in
//!   `functions/`, `triggers/`, `types/` and `views/`
//!
//! # Examples
//!
//! ```no_run
//! use sqlorder_core::{Config, build_load_plan};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { root: Some(std::path::PathBuf::from("/path/to/sql")) };
//! let plan = build_load_plan(cfg)?;
//! for file in &plan.files {
//!     println!("{}", file);
//! }
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod constants;
mod error;
mod parser;
mod planner;
mod reporter;
mod resolver;
mod sanity;
mod types;

// Re-export public API
pub use collector::collect_sources;
pub use config::{Config, find_git_root};
pub use constants::{LOAD_ORDER, SQL_EXTENSION, TYPED_DIRS};
pub use error::{ResolveError, SanityError};
pub use parser::dependencies_in;
pub use planner::{build_load_plan, run_check};
pub use reporter::{print_check_summary, print_error, print_load_order};
pub use resolver::{DependencyResolver, resolve_dependencies};
pub use sanity::check;
pub use types::{Category, LoadPlan, SourceFile, SourceSet};
