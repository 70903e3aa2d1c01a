//! Suggestion record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What kind of situation a suggestion reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    /// Tasks past their due date.
    OverdueTask,
    /// A contact that has gone quiet.
    FollowUp,
    /// A deal that needs a next step.
    DealAction,
    /// Something on the calendar needs preparation.
    CalendarGap,
}

/// What the user is asked to do about a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    ReviewTasks,
    SendReminder,
    CreateTask,
}

/// Urgency of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Review state of a suggestion. Seeded records are always pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    Pending,
}

/// A suggestion as it is inserted into `mc_suggestions`.
///
/// Field names are the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub suggestion_type: SuggestionType,
    pub title: &'static str,
    pub description: &'static str,
    pub action_type: ActionType,
    pub priority: Priority,
    pub status: SuggestionStatus,
}

/// A row echoed back by the server after an insert.
///
/// The server may add columns of its own (`id`, `created_at`, ...), and older
/// table layouts name the type column `type` instead of `suggestion_type`.
/// Every field is optional so reporting never fails on an unexpected shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsertedSuggestion {
    /// Server-assigned identifier (integer or UUID depending on the table).
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub suggestion_type: Option<String>,

    #[serde(default, rename = "type")]
    pub legacy_type: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Raw creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl InsertedSuggestion {
    /// The suggestion type under whichever key the server returned.
    pub fn type_label(&self) -> &str {
        self.suggestion_type
            .as_deref()
            .or(self.legacy_type.as_deref())
            .unwrap_or("unknown")
    }

    /// Upper-cased priority, or `?` if the server did not return one.
    pub fn priority_label(&self) -> String {
        self.priority
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "?".to_string())
    }

    /// Creation timestamp, if present and in RFC 3339 form.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// One-line summary: `[HIGH] overdue_task: title`.
    pub fn summary_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.priority_label(),
            self.type_label(),
            self.title.as_deref().unwrap_or_default()
        )
    }
}
