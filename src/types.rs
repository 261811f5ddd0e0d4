//! Core types for the todo store.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a todo.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl TodoId {
    pub fn next(self) -> Self {
        TodoId(self.0 + 1)
    }
}

impl fmt::Debug for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TodoId({})", self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record as persisted on disk.
///
/// The on-disk representation is a flat JSON object with exactly these
/// four fields; `id` and `created_at` are assigned by the store and never
/// accepted from clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier (assigned by store).
    pub id: TodoId,

    /// Non-empty display text.
    pub title: String,

    /// Completion flag.
    pub completed: bool,

    /// ISO-8601 creation time, set once and never mutated.
    pub created_at: String,
}

/// Input for creating a new todo (before id/created_at assigned).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoDraft {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoDraft {
    /// Draft with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }
}

/// Partial update for an existing todo. Unset fields keep their current
/// values.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Check a title against the domain rules.
///
/// Returns the violation messages, empty when valid. A title that is
/// absent or blank after trimming is rejected.
pub fn validate_title(title: Option<&str>) -> Vec<String> {
    match title {
        Some(t) if !t.trim().is_empty() => Vec::new(),
        _ => vec!["Title can't be blank".to_string()],
    }
}

/// Current time as an ISO-8601 string (UTC, second precision).
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
