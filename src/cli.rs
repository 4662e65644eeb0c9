use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::client::aggregate::{TeamQueries, TeamSource};
use crate::client::ClickUpClient;
use crate::error::Error;
use crate::model::{Folder, List, Space, Task, TeamData, TimeEntry};
use crate::util::query::Query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Space { id: String, query: Query },
    Spaces { team_id: Option<String>, query: Query },
    Folders { space_id: String, query: Query },
    Lists { folder_id: String, query: Query },
    Tasks { list_id: String, query: Query },
    Task { id: String, query: Query },
    TimeEntries { team_id: Option<String>, query: Query },
    TeamData { source: Option<TeamSource>, queries: TeamQueries },
}

impl Command {
    /// Fill in the configured team for commands that were run without one.
    pub fn with_default_team(self, team_id: Option<&str>) -> Result<Self> {
        let missing = || {
            anyhow::anyhow!("No team given. Pass one, or set team_id in ~/.clickup/config.toml")
        };
        Ok(match self {
            Command::Spaces { team_id: None, query } => Command::Spaces {
                team_id: Some(team_id.ok_or_else(missing)?.to_string()),
                query,
            },
            Command::TimeEntries { team_id: None, query } => Command::TimeEntries {
                team_id: Some(team_id.ok_or_else(missing)?.to_string()),
                query,
            },
            Command::TeamData { source: None, queries } => Command::TeamData {
                source: Some(TeamSource::Team(team_id.ok_or_else(missing)?.to_string())),
                queries,
            },
            other => other,
        })
    }
}

/// Whatever a command produced, serialized as-is.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Space(Space),
    Spaces(Vec<Space>),
    Folders(Vec<Folder>),
    Lists(Vec<List>),
    Task(Task),
    Tasks(Vec<Task>),
    TimeEntries(Vec<TimeEntry>),
    TeamData(Vec<TeamData>),
}

/// Run a parsed command. Team-scoped commands must have their team resolved
/// (see [`Command::with_default_team`]).
pub async fn execute(client: &ClickUpClient, command: Command) -> crate::Result<Output> {
    Ok(match command {
        Command::Space { id, query } => Output::Space(client.get_space(&id, &query).await?),
        Command::Spaces {
            team_id: Some(team_id),
            query,
        } => Output::Spaces(client.get_spaces(&team_id, &query).await?),
        Command::Folders { space_id, query } => {
            Output::Folders(client.get_folders(&space_id, &query).await?)
        }
        Command::Lists { folder_id, query } => {
            Output::Lists(client.get_lists(&folder_id, &query).await?)
        }
        Command::Tasks { list_id, query } => {
            Output::Tasks(client.get_tasks(&list_id, &query).await?)
        }
        Command::Task { id, query } => Output::Task(client.get_task(&id, &query).await?),
        Command::TimeEntries {
            team_id: Some(team_id),
            query,
        } => Output::TimeEntries(client.get_time_entries(&team_id, &query).await?),
        Command::TeamData {
            source: Some(source),
            queries,
        } => Output::TeamData(client.get_team_data(&source, &queries).await?),
        Command::Spaces { team_id: None, .. }
        | Command::TimeEntries { team_id: None, .. }
        | Command::TeamData { source: None, .. } => return Err(Error::MissingTeam),
    })
}

/// Parse the arguments after the program name. `None` means show help.
///
/// Supported forms:
///   clickup space <id> [--query k=v]...
///   clickup spaces [team] [--query k=v]...
///   clickup team-data (--team <id> | --space <id>...) [--task-query k=v]...
pub fn parse_args(args: &[String]) -> Result<Option<Command>> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(None);
    };

    let command = match name.as_str() {
        "help" | "-h" | "--help" => return Ok(None),
        "space" => {
            let (id, query) = parse_resource(name, rest, true)?;
            Command::Space {
                id: id.context("Usage: clickup space <space_id>")?,
                query,
            }
        }
        "spaces" => {
            let (team_id, query) = parse_resource(name, rest, false)?;
            Command::Spaces { team_id, query }
        }
        "folders" => {
            let (id, query) = parse_resource(name, rest, true)?;
            Command::Folders {
                space_id: id.context("Usage: clickup folders <space_id>")?,
                query,
            }
        }
        "lists" => {
            let (id, query) = parse_resource(name, rest, true)?;
            Command::Lists {
                folder_id: id.context("Usage: clickup lists <folder_id>")?,
                query,
            }
        }
        "tasks" => {
            let (id, query) = parse_resource(name, rest, true)?;
            Command::Tasks {
                list_id: id.context("Usage: clickup tasks <list_id>")?,
                query,
            }
        }
        "task" => {
            let (id, query) = parse_resource(name, rest, true)?;
            Command::Task {
                id: id.context("Usage: clickup task <task_id>")?,
                query,
            }
        }
        "time-entries" => {
            let (team_id, query) = parse_resource(name, rest, false)?;
            Command::TimeEntries { team_id, query }
        }
        "team-data" => parse_team_data(rest)?,
        other => bail!("Unknown command '{other}'. Run `clickup help` for usage."),
    };
    Ok(Some(command))
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("Missing value for {flag}"))
}

fn push_pair(query: &mut Query, raw: &str, flag: &str) -> Result<()> {
    let (key, value) =
        Query::parse_pair(raw).with_context(|| format!("Expected key=value for {flag}, got '{raw}'"))?;
    query.push(key, value);
    Ok(())
}

/// `<id> [--query k=v]...` with the id optional when `id_required` is false.
fn parse_resource(name: &str, args: &[String], id_required: bool) -> Result<(Option<String>, Query)> {
    let mut id = None;
    let mut query = Query::new();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-q" | "--query" => {
                push_pair(&mut query, flag_value(args, i, "--query")?, "--query")?;
                i += 1;
            }
            flag if flag.starts_with('-') => bail!("Unknown flag '{flag}' for {name}"),
            value => {
                if id.is_some() {
                    bail!("Unexpected argument '{value}' for {name}");
                }
                id = Some(value.to_string());
            }
        }
        i += 1;
    }

    if id_required && id.is_none() {
        bail!("Missing id for {name}");
    }
    Ok((id, query))
}

fn parse_team_data(args: &[String]) -> Result<Command> {
    let mut team = None;
    let mut spaces: Vec<String> = Vec::new();
    let mut queries = TeamQueries::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--team" => team = Some(flag_value(args, i, flag)?.to_string()),
            "--space" => spaces.push(flag_value(args, i, flag)?.to_string()),
            "--space-query" => push_pair(&mut queries.space, flag_value(args, i, flag)?, flag)?,
            "--folder-query" => push_pair(&mut queries.folder, flag_value(args, i, flag)?, flag)?,
            "--list-query" => push_pair(&mut queries.list, flag_value(args, i, flag)?, flag)?,
            "--task-query" => push_pair(&mut queries.task, flag_value(args, i, flag)?, flag)?,
            other => bail!("Unexpected argument '{other}' for team-data"),
        }
        i += 2;
    }

    let source = match (team, spaces.is_empty()) {
        (Some(_), false) => bail!("Use either --team or --space, not both"),
        (Some(team), true) => Some(TeamSource::Team(team)),
        (None, false) => Some(TeamSource::Spaces(spaces)),
        (None, true) => None,
    };
    Ok(Command::TeamData { source, queries })
}

pub fn print_help() {
    println!("clickup — query the ClickUp API from the terminal\n");
    println!("USAGE:");
    println!("  clickup space <space_id>          One space");
    println!("  clickup spaces [team_id]          All spaces in a team");
    println!("  clickup folders <space_id>        Folders in a space");
    println!("  clickup lists <folder_id>         Lists in a folder");
    println!("  clickup tasks <list_id>           Tasks in a list");
    println!("  clickup task <task_id>            One task");
    println!("  clickup time-entries [team_id]    Time entries for a team");
    println!("  clickup team-data [--team <id> | --space <id>...]");
    println!("                                    Every task, tagged with space/folder/list names");
    println!();
    println!("OPTIONS:");
    println!("  -q, --query <k=v>    Query parameter for single-resource commands (repeatable)");
    println!("  --space-query <k=v>  team-data: filter spaces");
    println!("  --folder-query <k=v> team-data: filter folders");
    println!("  --list-query <k=v>   team-data: filter lists");
    println!("  --task-query <k=v>   team-data: filter tasks");
    println!();
    println!("The API key is read from CLICKUP_API_KEY or api_key in ~/.clickup/config.toml.");
    println!("Output is JSON on stdout; failures print null. Set RUST_LOG=debug for request logs.");
}
