//! Directory layout of a SQL root.

use crate::types::Category;

/// Extension of files considered for loading
pub const SQL_EXTENSION: &str = "sql";

/// Category directories probed during the preflight check
pub const TYPED_DIRS: &[Category] =
    &[Category::Functions, Category::Triggers, Category::Types, Category::Views];

/// Input order handed to the resolver. Files with no declared dependency keep this order.
pub const LOAD_ORDER: &[Category] =
    &[Category::Types, Category::Functions, Category::Views, Category::Triggers];

/// Directory looked up under the git root when no `--root` is given
pub const DEFAULT_SQL_DIR: &str = "sql";
