//! Seed command - insert the demo suggestions.

use colored::Colorize;
use mc_seed::{InsertedSuggestion, SUGGESTIONS, SeedConfig, Seeder, payload_pretty};
use tracing::debug;

pub fn run(dry_run: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = SeedConfig::from_env()?;
    debug!(?config, "resolved configuration");

    if dry_run {
        println!(
            "{} {} suggestions to {}",
            "Would insert".cyan().bold(),
            SUGGESTIONS.len(),
            config.endpoint().white()
        );
        println!("{}", payload_pretty(&SUGGESTIONS)?);
        return Ok(());
    }

    // Fails before any request if the HTTP client cannot be built.
    let seeder = Seeder::new(config)?;

    println!(
        "Seeding {} suggestions into mc_suggestions...",
        SUGGESTIONS.len()
    );

    let rows = seeder.insert(&SUGGESTIONS)?;

    println!(
        "{}",
        format!("Successfully inserted {} suggestions:", rows.len())
            .green()
            .bold()
    );
    for row in &rows {
        println!("  {}", row.summary_line());
        if verbose {
            print_details(row);
        }
    }

    Ok(())
}

fn print_details(row: &InsertedSuggestion) {
    if let Some(id) = &row.id {
        println!("      id:      {}", id);
    }
    match (row.created_at(), row.created_at.as_deref()) {
        (Some(ts), _) => println!("      created: {}", ts.format("%Y-%m-%d %H:%M:%S UTC")),
        (None, Some(raw)) => println!("      created: {}", raw),
        (None, None) => {}
    }
}
