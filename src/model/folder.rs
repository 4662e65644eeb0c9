use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::list::List;
use crate::util::de;

/// Back-reference from a folder to the space that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSpace {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub access: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub orderindex: Option<i64>,
    #[serde(default)]
    pub override_statuses: bool,
    #[serde(default)]
    pub hidden: bool,
    pub space: FolderSpace,
    /// Sent as a string by the API ("20").
    #[serde(deserialize_with = "de::string")]
    pub task_count: String,
    /// List stubs embedded in the folder response.
    #[serde(default)]
    pub lists: Vec<List>,
    /// Fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    pub fn task_count(&self) -> Option<u64> {
        self.task_count.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_folder_with_string_count_and_stubs() {
        let folder: Folder = serde_json::from_value(serde_json::json!({
            "id": "457",
            "name": "Updated Folder Name",
            "orderindex": 0,
            "override_statuses": false,
            "hidden": false,
            "space": { "id": "789", "name": "Space Name", "access": true },
            "task_count": "0",
            "lists": [{ "id": "124", "name": "Backlog" }]
        }))
        .unwrap();
        assert_eq!(folder.task_count(), Some(0));
        assert_eq!(folder.space.id, "789");
        assert_eq!(folder.lists[0].name, "Backlog");
    }

    #[test]
    fn numeric_count_is_accepted() {
        let folder: Folder = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "F", "space": { "id": 2 }, "task_count": 12
        }))
        .unwrap();
        assert_eq!(folder.id, "1");
        assert_eq!(folder.task_count(), Some(12));
    }
}
