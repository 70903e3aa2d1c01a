//! The fixed set of demo suggestions.

use super::suggestion::{ActionType, Priority, Suggestion, SuggestionStatus, SuggestionType};

/// Demo suggestions inserted on every run.
pub static SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        suggestion_type: SuggestionType::OverdueTask,
        title: "3 Overdue Tasks seit > 7 Tagen",
        description: "Es gibt 3 Tasks die seit mehr als einer Woche überfällig sind. \
                      Priorisierung empfohlen.",
        action_type: ActionType::ReviewTasks,
        priority: Priority::High,
        status: SuggestionStatus::Pending,
    },
    Suggestion {
        suggestion_type: SuggestionType::FollowUp,
        title: "Lisa-Marie Robin (moovin): Kein Kontakt seit 7 Tagen",
        description: "Letzte Interaktion war vor 7 Tagen. \
                      Follow-up empfohlen um den Kontakt warm zu halten.",
        action_type: ActionType::SendReminder,
        priority: Priority::Medium,
        status: SuggestionStatus::Pending,
    },
    Suggestion {
        suggestion_type: SuggestionType::DealAction,
        title: "E&V Frankfurt: Max zurück am 20.02 — Reminder setzen?",
        description: "Maximilian Münz ist ab 20.02. wieder erreichbar. \
                      Jetzt Reminder setzen für rechtzeitiges Follow-up.",
        action_type: ActionType::CreateTask,
        priority: Priority::Medium,
        status: SuggestionStatus::Pending,
    },
    Suggestion {
        suggestion_type: SuggestionType::CalendarGap,
        title: "Morgen Shoot E&V Große Elbstraße — Equipment ready?",
        description: "Shoot morgen geplant. \
                      Equipment-Check empfohlen: Kamera, Drohne, Akkus, SD-Karten.",
        action_type: ActionType::CreateTask,
        priority: Priority::High,
        status: SuggestionStatus::Pending,
    },
];
