//! Typed client for the ClickUp v2 REST API.
//!
//! Covers the space → folder → list → task hierarchy and time tracking, and
//! can flatten a whole team into one list of tasks tagged with where each was
//! found.
//!
//! ```no_run
//! use clickup_helper::{ClickUpClient, Query, TeamQueries, TeamSource};
//!
//! # async fn example() -> clickup_helper::Result<()> {
//! let client = ClickUpClient::new("pk_123")?;
//! let tasks = client
//!     .get_team_data(&TeamSource::Team("512".into()), &TeamQueries::default())
//!     .await?;
//! for t in &tasks {
//!     println!("{} / {} / {}: {}", t.space_name, t.folder_name, t.list_name, t.task.name);
//! }
//! let spaces = client.get_spaces("512", &Query::new().with("archived", "false")).await?;
//! # let _ = spaces;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod util;

pub use client::aggregate::{TeamQueries, TeamSource};
pub use client::fetch::{Endpoint, Fetched, Shape};
pub use client::transport::{FetchOptions, HttpTransport, RawResponse, Transport};
pub use client::validate::Validator;
pub use client::ClickUpClient;
pub use error::{Error, ErrorKind, Result, Stage};
pub use util::query::Query;
