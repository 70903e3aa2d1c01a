//! mc-seed: seeds the `mc_suggestions` table of a Supabase project with demo data.
//!
//! One run posts the four records in [`SUGGESTIONS`] to
//! `<SUPABASE_URL>/rest/v1/mc_suggestions` in a single blocking request and
//! returns the rows the server echoed back.
//!
//! # Example
//!
//! ```no_run
//! use mc_seed::{SeedConfig, Seeder, SUGGESTIONS};
//!
//! let seeder = Seeder::new(SeedConfig::from_env().unwrap()).unwrap();
//! let rows = seeder.insert(&SUGGESTIONS).unwrap();
//!
//! for row in &rows {
//!     println!("{}", row.summary_line());
//! }
//! ```

pub mod config;
pub mod error;
pub mod suggestion;

mod seeder;

pub use config::{Defaults, SeedConfig};
pub use error::{Result, SeedError};
pub use seeder::{Seeder, build_headers, payload, payload_pretty};
pub use suggestion::{
    ActionType, InsertedSuggestion, Priority, SUGGESTIONS, Suggestion, SuggestionStatus,
    SuggestionType,
};
