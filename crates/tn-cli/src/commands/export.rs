use std::path::Path;

use tn_core::Catalog;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let json = Catalog::builtin()
        .to_json_pretty()
        .map_err(|e| format!("export failed: {e}"))?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            eprintln!("  Exported catalog to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
