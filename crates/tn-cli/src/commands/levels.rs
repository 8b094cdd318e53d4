use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Title", "Options"]);

    for scenario in catalog.iter() {
        let options = scenario
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        table.add_row(vec![&scenario.id, &scenario.title, &options]);
    }

    println!("{table}");
    println!();
    println!("  {} levels", catalog.len());

    Ok(())
}
