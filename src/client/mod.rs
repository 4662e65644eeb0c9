//! ClickUp API client: transport, typed fetching, per-resource accessors and
//! the space → folder → list → task aggregator.

pub mod aggregate;
pub mod fetch;
pub mod transport;
pub mod validate;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::Result;
use crate::model::{Folder, List, Space, Task, TimeEntry};
use crate::util::query::Query;
use fetch::Endpoint;
use transport::{FetchOptions, HttpTransport, Transport, DEFAULT_BASE_URL};
use validate::Validator;

pub struct ClickUpClient {
    transport: Box<dyn Transport>,
}

impl ClickUpClient {
    /// Client against the public API. Fails if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let key = SecretString::from(api_key.into());
        let transport = HttpTransport::new(key, base_url)?;
        Ok(Self::with_transport(Box::new(transport)))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn get_one<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        validate: &dyn Validator,
        options: &FetchOptions,
    ) -> Result<T> {
        self.fetch_typed(&endpoint, validate, options)
            .await?
            .into_one(&endpoint.path)
    }

    async fn get_many<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        validate: &dyn Validator,
        options: &FetchOptions,
    ) -> Result<Vec<T>> {
        self.fetch_typed(&endpoint, validate, options)
            .await?
            .into_many(&endpoint.path)
    }

    // Each accessor has a `_with` form taking per-request options (method,
    // body, extra headers); the short form sends a plain GET.
    pub async fn get_space(&self, space_id: &str, query: &Query) -> Result<Space> {
        self.get_space_with(space_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_space_with(
        &self,
        space_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Space> {
        self.get_one(Endpoint::space(space_id, query), &validate::is_valid_space, options)
            .await
    }

    pub async fn get_spaces(&self, team_id: &str, query: &Query) -> Result<Vec<Space>> {
        self.get_spaces_with(team_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_spaces_with(
        &self,
        team_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Vec<Space>> {
        self.get_many(Endpoint::team_spaces(team_id, query), &validate::is_valid_space, options)
            .await
    }

    pub async fn get_folder(&self, folder_id: &str, query: &Query) -> Result<Folder> {
        self.get_folder_with(folder_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_folder_with(
        &self,
        folder_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Folder> {
        self.get_one(Endpoint::folder(folder_id, query), &validate::is_valid_folder, options)
            .await
    }

    pub async fn get_folders(&self, space_id: &str, query: &Query) -> Result<Vec<Folder>> {
        self.get_folders_with(space_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_folders_with(
        &self,
        space_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Vec<Folder>> {
        self.get_many(Endpoint::space_folders(space_id, query), &validate::is_valid_folder, options)
            .await
    }

    pub async fn get_list(&self, list_id: &str, query: &Query) -> Result<List> {
        self.get_list_with(list_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_list_with(
        &self,
        list_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<List> {
        self.get_one(Endpoint::list(list_id, query), &validate::is_valid_list, options)
            .await
    }

    pub async fn get_lists(&self, folder_id: &str, query: &Query) -> Result<Vec<List>> {
        self.get_lists_with(folder_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_lists_with(
        &self,
        folder_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Vec<List>> {
        self.get_many(Endpoint::folder_lists(folder_id, query), &validate::is_valid_list, options)
            .await
    }

    pub async fn get_task(&self, task_id: &str, query: &Query) -> Result<Task> {
        self.get_task_with(task_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_task_with(
        &self,
        task_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Task> {
        self.get_one(Endpoint::task(task_id, query), &validate::is_valid_task, options)
            .await
    }

    pub async fn get_tasks(&self, list_id: &str, query: &Query) -> Result<Vec<Task>> {
        self.get_tasks_with(list_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_tasks_with(
        &self,
        list_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Vec<Task>> {
        self.get_many(Endpoint::list_tasks(list_id, query), &validate::is_valid_task, options)
            .await
    }

    /// Time entries for a team. Without `start_date`/`end_date` in `query`
    /// the API returns the last thirty days for the authenticated user.
    pub async fn get_time_entries(&self, team_id: &str, query: &Query) -> Result<Vec<TimeEntry>> {
        self.get_time_entries_with(team_id, query, &FetchOptions::default()).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_time_entries_with(
        &self,
        team_id: &str,
        query: &Query,
        options: &FetchOptions,
    ) -> Result<Vec<TimeEntry>> {
        self.get_many(Endpoint::time_entries(team_id, query), &validate::is_valid_time_entry, options)
            .await
    }
}
