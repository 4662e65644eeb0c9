use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Status, User};
use crate::util::de;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub admin_can_manage: Option<bool>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub members: Vec<Member>,
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub multiple_assignees: bool,
    /// Per-space feature toggles (due dates, time tracking, ...), kept as sent.
    #[serde(default)]
    pub features: Value,
    /// Fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The part of a space the aggregator needs: where to fetch from and what to
/// call it in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRef {
    pub id: String,
    pub name: String,
}

impl SpaceRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Space> for SpaceRef {
    fn from(space: &Space) -> Self {
        Self::new(space.id.clone(), space.name.clone())
    }
}
