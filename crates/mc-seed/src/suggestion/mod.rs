//! Suggestion records for the `mc_suggestions` table.
//!
//! This module defines the records sent to the server, the fixed demo
//! catalog, and the rows the server echoes back after inserting them.

mod catalog;
mod suggestion;

pub use catalog::SUGGESTIONS;
pub use suggestion::{
    ActionType, InsertedSuggestion, Priority, Suggestion, SuggestionStatus, SuggestionType,
};
