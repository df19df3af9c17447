//! Task Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::escape::{escape_html, unescape_html};
use crate::id::TaskId;

/// A single to-do record, serialized exactly as the page has always stored it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Escaped text, safe to drop into markup
    pub text: String,
    pub completed: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create an incomplete task from already-trimmed raw input.
    ///
    /// The timestamp is truncated to milliseconds so that a stored task
    /// reloads equal to the one held in memory.
    pub fn new(id: TaskId, raw_text: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: escape_html(raw_text),
            completed: false,
            created_at: truncate_to_millis(created_at),
        }
    }

    /// Text as the user typed it, for rendering as an inert text node
    pub fn display_text(&self) -> String {
        unescape_html(&self.text)
    }
}

fn truncate_to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(at)
}

/// `createdAt` in the `YYYY-MM-DDTHH:MM:SS.sssZ` shape
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
