//! CLI argument definitions using clap.

use clap::Parser;

/// Seed the mc_suggestions table with demo suggestions.
///
/// Reads SUPABASE_URL and SUPABASE_KEY from the environment (or a .env file)
/// and inserts four sample suggestions with a single request.
#[derive(Parser)]
#[command(name = "mc-seed")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Print the payload and target URL without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
