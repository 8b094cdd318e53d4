use std::path::Path;

use tn_core::Catalog;

pub fn run(file: &Path) -> Result<(), String> {
    let catalog = Catalog::load(file).map_err(|e| format!("{}: {e}", file.display()))?;

    let options: usize = catalog.iter().map(|s| s.options.len()).sum();
    println!("  All checks passed for '{}'.", file.display());
    println!("  {} levels, {} options", catalog.len(), options);

    Ok(())
}
