pub mod check;
pub mod export;
pub mod levels;
pub mod play;
pub mod show;

use std::path::Path;

use tn_core::Catalog;

/// Load the catalog at `path`, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
