use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Priority, Status};
use crate::util::de;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub orderindex: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
