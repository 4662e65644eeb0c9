use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Status, Tag, User};
use crate::util::{de, time};

/// The slice of a task that a time entry carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryTask {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub custom_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLocation {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub list_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub folder_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub space_id: Option<String>,
    #[serde(default)]
    pub list_name: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub space_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(default)]
    pub task: Option<EntryTask>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub wid: Option<String>,
    pub user: User,
    #[serde(default)]
    pub billable: bool,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub at: Option<String>,
    #[serde(default)]
    pub task_location: Option<TaskLocation>,
    #[serde(default)]
    pub task_tags: Vec<Tag>,
    #[serde(default)]
    pub task_url: Option<String>,
    /// Fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimeEntry {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.start.as_deref())
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.end.as_deref())
    }

    /// Tracked time. `None` while the timer is still running (ClickUp reports
    /// a negative duration for those).
    pub fn duration(&self) -> Option<Duration> {
        let millis: i64 = self.duration.as_deref()?.trim().parse().ok()?;
        if millis < 0 {
            return None;
        }
        Some(Duration::milliseconds(millis))
    }

    pub fn is_running(&self) -> bool {
        self.duration
            .as_deref()
            .is_some_and(|d| d.trim().starts_with('-'))
    }
}
