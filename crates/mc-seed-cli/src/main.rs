//! mc-seed CLI - seeds demo suggestions into Supabase.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use mc_seed::SeedError;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::seed::run(cli.dry_run, cli.verbose) {
        match e.downcast_ref::<SeedError>() {
            // Already reads `ERROR <status>: <body>`.
            Some(api @ SeedError::Api { .. }) => eprintln!("{}", api),
            _ => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "mc_seed=debug,mc_seed_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
