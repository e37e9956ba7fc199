use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// A todo as stored in the `todo` table. Timestamps are kept as the
/// RFC 3339 text that was written, so listings show exactly what is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub date_created: String,
    /// Empty until the todo is completed.
    pub date_completed: String,
}

#[allow(dead_code)]
impl Todo {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_rfc3339(&self.date_created)
    }

    pub fn completed_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_rfc3339(&self.date_completed)
    }
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub description: String,
    pub date_created: String,
}

impl NewTodo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            date_created: now_rfc3339(),
        }
    }
}

/// Current local time, e.g. "2026-01-11T12:34:56+01:00" (or "...Z" in UTC).
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_rfc3339(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s).ok()
}
