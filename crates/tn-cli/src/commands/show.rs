use std::path::Path;

use colored::Colorize;

pub fn run(catalog: Option<&Path>, level: u32, reveal: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let scenario = catalog
        .level(level)
        .ok_or_else(|| format!("no level {level} (catalog has {})", catalog.len()))?;

    println!("  {} {}", format!("Level {}:", scenario.id).dimmed(), scenario.title.bold());
    println!();
    println!("  {}", scenario.alert);
    println!();

    for option in &scenario.options {
        let line = format!("{}) {}", option.key, option.label);
        if reveal && option.key == scenario.correct_key {
            println!("    {}", line.green().bold());
        } else {
            println!("    {line}");
        }
    }

    if reveal {
        let answer = match scenario.correct_option() {
            Some(option) => format!("{}) {}", option.key, option.label),
            None => scenario.correct_key.to_string(),
        };
        println!();
        println!("  Answer: {} - {}", answer.green(), scenario.explanation);
    }

    Ok(())
}
