//! Walks spaces → folders → lists → tasks and flattens the tasks it finds.
//!
//! Resolving spaces and their folders is best-effort: a space that fails is
//! skipped. Lists and tasks are all-or-nothing: one failure aborts the walk.

use futures::future::join_all;
use tracing::{debug, error, instrument, warn};

use super::ClickUpClient;
use crate::error::{Error, Result, Stage};
use crate::model::{Folder, SpaceRef, TeamData};
use crate::util::query::Query;

/// Where the walk starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSource {
    /// Every space in the team, fetched in one call.
    Team(String),
    /// These spaces, fetched one by one, in this order.
    Spaces(Vec<String>),
}

/// Query strings forwarded verbatim to each stage of the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamQueries {
    pub space: Query,
    pub folder: Query,
    pub list: Query,
    pub task: Query,
}

impl ClickUpClient {
    /// Every task reachable from `source`, tagged with where it was found.
    #[instrument(skip(self, queries))]
    pub async fn get_team_data(
        &self,
        source: &TeamSource,
        queries: &TeamQueries,
    ) -> Result<Vec<TeamData>> {
        let result = match self.resolve_spaces(source, &queries.space).await {
            Ok(spaces) => self.get_all_tasks_for_spaces(&spaces, queries).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            error!(error = %e, "team data aggregation failed");
        }
        result
    }

    async fn resolve_spaces(&self, source: &TeamSource, query: &Query) -> Result<Vec<SpaceRef>> {
        match source {
            TeamSource::Team(team_id) => {
                let spaces = self
                    .get_spaces(team_id, query)
                    .await
                    .map_err(|e| Error::aggregation(Stage::Spaces, team_id, e))?;
                Ok(spaces.iter().map(SpaceRef::from).collect())
            }
            TeamSource::Spaces(ids) => {
                let fetched = join_all(ids.iter().map(|id| self.get_space(id, query))).await;
                let spaces = ids
                    .iter()
                    .zip(fetched)
                    .filter_map(|(id, res)| match res {
                        Ok(space) => Some(SpaceRef::from(&space)),
                        Err(e) => {
                            warn!(space_id = %id, error = %e, "skipping space");
                            None
                        }
                    })
                    .collect();
                Ok(spaces)
            }
        }
    }

    /// The aggregator proper, for callers that already hold the spaces.
    ///
    /// Output order follows `spaces`, then each space's folders, lists and
    /// tasks in the order the API returned them. Nothing is deduplicated.
    #[instrument(skip_all, fields(spaces = spaces.len()))]
    pub async fn get_all_tasks_for_spaces(
        &self,
        spaces: &[SpaceRef],
        queries: &TeamQueries,
    ) -> Result<Vec<TeamData>> {
        let folder_results =
            join_all(spaces.iter().map(|s| self.get_folders(&s.id, &queries.folder))).await;

        let spaces_with_folders: Vec<(&SpaceRef, Vec<Folder>)> = spaces
            .iter()
            .zip(folder_results)
            .filter_map(|(space, res)| match res {
                Ok(folders) => Some((space, folders)),
                Err(e) => {
                    warn!(space = %space.name, error = %e, "skipping space without folders");
                    None
                }
            })
            .collect();

        let mut out = Vec::new();
        for (space, folders) in &spaces_with_folders {
            for folder in folders {
                let lists = self
                    .get_lists(&folder.id, &queries.list)
                    .await
                    .map_err(|e| Error::aggregation(Stage::Lists, &folder.id, e))?;

                for list in lists {
                    let tasks = self
                        .get_tasks(&list.id, &queries.task)
                        .await
                        .map_err(|e| Error::aggregation(Stage::Tasks, &list.id, e))?;
                    debug!(
                        space = %space.name,
                        folder = %folder.name,
                        list = %list.name,
                        count = tasks.len(),
                        "collected tasks"
                    );
                    out.extend(
                        tasks
                            .into_iter()
                            .map(|t| TeamData::new(t, &space.name, &folder.name, &list.name)),
                    );
                }
            }
        }
        Ok(out)
    }
}
