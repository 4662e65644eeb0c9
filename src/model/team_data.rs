use serde::{Deserialize, Serialize};

use super::task::Task;

/// A task tagged with the names of the space, folder and list the walk found
/// it under. The task itself is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    #[serde(flatten)]
    pub task: Task,
    pub space_name: String,
    pub folder_name: String,
    pub list_name: String,
}

impl TeamData {
    pub fn new(
        task: Task,
        space_name: impl Into<String>,
        folder_name: impl Into<String>,
        list_name: impl Into<String>,
    ) -> Self {
        Self {
            task,
            space_name: space_name.into(),
            folder_name: folder_name.into(),
            list_name: list_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_with_names_beside_id_refs() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1", "name": "Write docs", "date_created": "1",
            "space": { "id": "s1" }, "folder": { "id": "f1" }, "list": { "id": "l1" }
        }))
        .unwrap();
        let data = TeamData::new(task, "Engineering", "Q3", "Sprint 4");

        let out = serde_json::to_value(&data).unwrap();
        assert_eq!(out["id"], json!("t1"));
        assert_eq!(out["space"], json!({ "id": "s1" }));
        assert_eq!(out["space_name"], json!("Engineering"));
        assert_eq!(out["folder_name"], json!("Q3"));
        assert_eq!(out["list_name"], json!("Sprint 4"));

        let back: TeamData = serde_json::from_value(out).unwrap();
        assert_eq!(back, data);
        assert!(back.task.extra.is_empty());
    }
}
