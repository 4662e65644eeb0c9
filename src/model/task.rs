use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{CustomField, Status, User};
use crate::util::{de, time};

/// Id-only pointer from a task to its list, folder or space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub custom_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub markdown_description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub orderindex: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_closed: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date_done: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub watchers: Vec<User>,
    #[serde(default)]
    pub checklists: Vec<Value>,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub parent: Value,
    #[serde(default)]
    pub priority: Value,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub time_estimate: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub list: Option<Ref>,
    #[serde(default)]
    pub folder: Option<Ref>,
    #[serde(default)]
    pub space: Option<Ref>,
    #[serde(default)]
    pub url: Option<String>,
    /// Fields this crate does not model, kept so a task serializes back the
    /// way it arrived.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.date_created.as_deref())
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.date_updated.as_deref())
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.date_closed.as_deref())
    }

    pub fn done_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.date_done.as_deref())
    }

    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.due_date.as_deref())
    }

    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        time::from_millis(self.start_date.as_deref())
    }

    /// "urgent", "high", ... when the task has a priority set.
    pub fn priority_label(&self) -> Option<&str> {
        self.priority.get("priority").and_then(Value::as_str)
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_str()
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags
            .iter()
            .filter_map(|t| t.get("name").and_then(Value::as_str))
            .collect()
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list.as_ref().map(|r| r.id.as_str())
    }

    pub fn folder_id(&self) -> Option<&str> {
        self.folder.as_ref().map(|r| r.id.as_str())
    }

    pub fn space_id(&self) -> Option<&str> {
        self.space.as_ref().map(|r| r.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "9hx",
            "custom_id": null,
            "name": "New Task Name",
            "status": { "status": "in progress", "color": "#d3d3d3", "orderindex": 1, "type": "custom" },
            "orderindex": "1.00000000000000000000000000000000",
            "date_created": "1567780450202",
            "date_updated": "1567780450202",
            "date_closed": null,
            "date_done": null,
            "creator": { "id": 183, "username": "John Doe", "color": "#827718", "profilePicture": null },
            "assignees": [],
            "watchers": [],
            "checklists": [],
            "tags": [{ "name": "backend", "tag_fg": "#fff", "tag_bg": "#000" }],
            "parent": "abc1",
            "priority": { "id": "1", "priority": "urgent", "color": "#f50000" },
            "due_date": null,
            "start_date": null,
            "points": 3,
            "time_estimate": 3600000,
            "time_spent": null,
            "custom_fields": [],
            "list": { "id": "123" },
            "folder": { "id": "456" },
            "space": { "id": "789" },
            "url": "https://app.clickup.com/t/9hx",
            "team_id": "512"
        })
    }

    #[test]
    fn reads_task_and_exposes_opaque_fields() {
        let task: Task = serde_json::from_value(sample()).unwrap();
        assert_eq!(task.priority_label(), Some("urgent"));
        assert_eq!(task.parent_id(), Some("abc1"));
        assert_eq!(task.tag_names(), vec!["backend"]);
        assert_eq!(task.creator.as_ref().unwrap().id.as_deref(), Some("183"));
        assert_eq!(task.time_estimate.as_deref(), Some("3600000"));
        assert_eq!(task.list_id(), Some("123"));
        assert!(task.closed_at().is_none());
        assert_eq!(
            task.created_at().unwrap().to_rfc3339(),
            "2019-09-06T14:34:10.202+00:00"
        );
    }

    #[test]
    fn unknown_fields_survive_reserialization() {
        let task: Task = serde_json::from_value(sample()).unwrap();
        assert_eq!(task.extra.get("team_id"), Some(&json!("512")));

        let again = serde_json::to_value(&task).unwrap();
        assert_eq!(again["team_id"], json!("512"));
        assert_eq!(again["space"], json!({ "id": "789" }));
    }
}
