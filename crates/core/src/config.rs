//! Configuration constants and path utilities for mccmd.
//!
//! This module provides the fixed tokens the prompts understand and resolves
//! where the block catalog is read from, expanding shell variables like `~`.

use std::path::Path;

use log::debug;

use crate::catalog::{BundledCatalogSource, CatalogSource, FileCatalogSource};

/// Default path for a user-supplied block catalog
const DEFAULT_BLOCKS_PATH: &str = "~/.mccmd/blocks.yml";

/// Namespace every serialized block reference carries
pub const NAMESPACE_PREFIX: &str = "minecraft:";

/// Token that aborts the current clause or component and returns to its menu
pub const ESCAPE_TOKEN: &str = "back";

/// Menu value that finishes a clause builder session
pub const OK_CHOICE: &str = "OK";

/// Number of "did you mean" suggestions shown for an unknown identifier
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Title used for desktop notifications
pub const NOTIFICATION_TITLE: &str = "mccmd";

/// Resolves the block catalog file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// catalog path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use mccmd_core::config::get_blocks_path;
///
/// let custom_path = get_blocks_path(&Some("/path/to/blocks.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/blocks.yml");
/// ```
pub fn get_blocks_path(blocks_path_arg: &Option<String>) -> String {
    let blocks_path = match blocks_path_arg {
        Some(blocks_path) => blocks_path,
        None => DEFAULT_BLOCKS_PATH,
    };

    shellexpand::tilde(blocks_path).to_string()
}

/// Picks where the block catalog is loaded from.
///
/// An explicit path always wins, even if it does not exist (loading then
/// fails and the catalog is disabled with a warning). Without one, the
/// default path is used when present, falling back to the catalog bundled
/// into the binary.
pub fn resolve_catalog_source(blocks_path_arg: &Option<String>) -> Box<dyn CatalogSource> {
    let path = get_blocks_path(blocks_path_arg);

    if blocks_path_arg.is_some() || Path::new(&path).exists() {
        debug!("Block catalog path: `{}`", path);
        return Box::new(FileCatalogSource::new(path));
    }

    debug!("No block catalog at `{}`, using the bundled catalog", path);
    Box::new(BundledCatalogSource)
}
