use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Stable numeric task identifier, stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation time, millisecond precision
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a pending task. `text` must already be normalized with
    /// [`normalize_text`].
    pub fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            text,
            completed: false,
            created_at: created_at.trunc_subsecs(3),
        }
    }
}

/// Trim task text, returning `None` when nothing is left
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `createdAt` as `2025-01-02T03:04:05.678Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  Buy milk \n"), Some("Buy milk".into()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t\n "), None);
    }

    #[test]
    fn new_task_is_pending_and_truncated_to_millis() {
        let created = at(1_700_000_000_123) + chrono::Duration::nanoseconds(456_789);
        let task = Task::new(TaskId(7), "Read".into(), created);
        assert!(!task.completed);
        assert_eq!(task.created_at, at(1_700_000_000_123));
    }

    #[test]
    fn serializes_with_camel_case_and_millis() {
        let task = Task::new(TaskId(1), "Buy milk".into(), at(0));
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"text":"Buy milk","completed":false,"createdAt":"1970-01-01T00:00:00.000Z"}"#
        );
    }

    #[test]
    fn deserializes_browser_iso_strings() {
        let task: Task = serde_json::from_str(
            r#"{"id":1731000000000,"text":"x","completed":true,"createdAt":"2024-11-07T17:20:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(task.id, TaskId(1_731_000_000_000));
        assert!(task.completed);
        assert_eq!(task.created_at, Utc.with_ymd_and_hms(2024, 11, 7, 17, 20, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let result: Result<Task, _> =
            serde_json::from_str(r#"{"id":1,"text":"x","completed":false,"createdAt":"yesterday"}"#);
        assert!(result.is_err());
    }
}
