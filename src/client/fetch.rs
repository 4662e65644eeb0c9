use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::FetchOptions;
use super::validate::Validator;
use super::ClickUpClient;
use crate::error::{Error, Result};
use crate::util::query::Query;

/// How an endpoint wraps its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The body is the entity itself.
    Single,
    /// The body is `{ "<key>": [ ... ] }`.
    Collection(&'static str),
}

/// A path plus what to expect back from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub shape: Shape,
}

impl Endpoint {
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            shape: Shape::Single,
        }
    }

    pub fn collection(path: impl Into<String>, key: &'static str) -> Self {
        Self {
            path: path.into(),
            shape: Shape::Collection(key),
        }
    }

    fn resource(segments: &[&str], query: &Query, shape: Shape) -> Self {
        let path: String = segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                // odd positions are ids
                if i % 2 == 1 {
                    format!("/{}", urlencoding::encode(s))
                } else {
                    format!("/{s}")
                }
            })
            .collect();
        Self {
            path: query.append_to(&path),
            shape,
        }
    }

    pub fn space(space_id: &str, query: &Query) -> Self {
        Self::resource(&["space", space_id], query, Shape::Single)
    }

    pub fn team_spaces(team_id: &str, query: &Query) -> Self {
        Self::resource(&["team", team_id, "space"], query, Shape::Collection("spaces"))
    }

    pub fn folder(folder_id: &str, query: &Query) -> Self {
        Self::resource(&["folder", folder_id], query, Shape::Single)
    }

    pub fn space_folders(space_id: &str, query: &Query) -> Self {
        Self::resource(&["space", space_id, "folder"], query, Shape::Collection("folders"))
    }

    pub fn list(list_id: &str, query: &Query) -> Self {
        Self::resource(&["list", list_id], query, Shape::Single)
    }

    pub fn folder_lists(folder_id: &str, query: &Query) -> Self {
        Self::resource(&["folder", folder_id, "list"], query, Shape::Collection("lists"))
    }

    pub fn task(task_id: &str, query: &Query) -> Self {
        Self::resource(&["task", task_id], query, Shape::Single)
    }

    pub fn list_tasks(list_id: &str, query: &Query) -> Self {
        Self::resource(&["list", list_id, "task"], query, Shape::Collection("tasks"))
    }

    pub fn time_entries(team_id: &str, query: &Query) -> Self {
        Self::resource(&["team", team_id, "time_entries"], query, Shape::Collection("data"))
    }
}

/// A validated, typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Fetched<T> {
    pub fn into_one(self, endpoint: &str) -> Result<T> {
        match self {
            Fetched::One(value) => Ok(value),
            Fetched::Many(_) => Err(Error::Cardinality {
                endpoint: endpoint.to_string(),
                expected: "a single entity",
            }),
        }
    }

    pub fn into_many(self, endpoint: &str) -> Result<Vec<T>> {
        match self {
            Fetched::Many(values) => Ok(values),
            Fetched::One(_) => Err(Error::Cardinality {
                endpoint: endpoint.to_string(),
                expected: "a collection",
            }),
        }
    }
}

impl ClickUpClient {
    /// Fetch `endpoint`, check every record with `validate`, and read the
    /// result into `T`.
    ///
    /// A collection is all-or-nothing: one invalid element fails the whole
    /// fetch. Non-success statuses and invalid payloads are logged here and
    /// returned as errors.
    pub async fn fetch_typed<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        validate: &dyn Validator,
        options: &FetchOptions,
    ) -> Result<Fetched<T>> {
        let result = self.fetch_typed_inner(endpoint, validate, options).await;
        if let Err(e) = &result {
            warn!(endpoint = %endpoint.path, error = %e, "ClickUp fetch failed");
        }
        result
    }

    async fn fetch_typed_inner<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        validate: &dyn Validator,
        options: &FetchOptions,
    ) -> Result<Fetched<T>> {
        let path = endpoint.path.as_str();
        let resp = self.transport.send(path, options).await?;
        if !resp.is_success() {
            return Err(Error::Status {
                endpoint: path.to_string(),
                status: resp.status,
            });
        }

        let json: Value = serde_json::from_str(&resp.body).map_err(|source| Error::Decode {
            endpoint: path.to_string(),
            source,
        })?;

        let invalid = |reason: String, payload: &Value| {
            warn!(endpoint = path, %payload, "invalid payload");
            Error::InvalidPayload {
                endpoint: path.to_string(),
                reason,
            }
        };
        let decode = |source: serde_json::Error| Error::Decode {
            endpoint: path.to_string(),
            source,
        };

        match endpoint.shape {
            Shape::Single => {
                if !validate.validate(&json) {
                    return Err(invalid("missing required fields".into(), &json));
                }
                let value = serde_json::from_value(json).map_err(decode)?;
                Ok(Fetched::One(value))
            }
            Shape::Collection(key) => {
                let items = match json.get(key) {
                    Some(Value::Array(items)) => items,
                    _ => return Err(invalid(format!("expected an array under \"{key}\""), &json)),
                };
                if let Some(pos) = items.iter().position(|item| !validate.validate(item)) {
                    return Err(invalid(
                        format!("element {pos} of \"{key}\" is missing required fields"),
                        &json,
                    ));
                }
                debug!(endpoint = path, count = items.len(), "fetched collection");
                let values = match json {
                    Value::Object(mut map) => map.remove(key).unwrap_or_default(),
                    _ => Value::Null,
                };
                let values = serde_json::from_value(values).map_err(decode)?;
                Ok(Fetched::Many(values))
            }
        }
    }
}
