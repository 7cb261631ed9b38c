//! Backlog API CLI binary.
//!
//! A command-line interface for interacting with the Backlog API.

use clap::Parser;
use std::process::ExitCode;

use backlogapi::cli::{Cli, Command, Entity};
use backlogapi::{
    get_issues, get_issues_page, get_wikis, BacklogClient, BacklogError, Get, Issue,
    IssueUpdateParams, Page, PrettyPrint, Project, Update, Wiki, WikiUpdateParams,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match BacklogClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set BACKLOG_API_KEY and BACKLOG_HOST environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &BacklogClient, cli: Cli) -> backlogapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            entity,
            project,
            offset,
            count,
        } => handle_list(client, entity, &project, offset, count, cli.json).await,
        Command::Update {
            entity,
            id,
            summary,
            description,
            name,
            content,
        } => handle_update(client, entity, &id, summary, description, name, content, cli.json).await,
    }
}

async fn handle_get(
    client: &BacklogClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> backlogapi::Result<()> {
    match entity {
        Entity::Project => {
            let project = Project::get(client, id.to_string()).await?;
            output_single(&project, json)?;
        }
        Entity::Issue => {
            let issue = Issue::get(client, id.to_string()).await?;
            output_single(&issue, json)?;
        }
        Entity::Wiki => {
            let wiki_id = parse_wiki_id(id)?;
            let wiki = Wiki::get(client, wiki_id).await?;
            output_single(&wiki, json)?;
        }
    }
    Ok(())
}

async fn handle_list(
    client: &BacklogClient,
    entity: Entity,
    project: &str,
    offset: Option<u64>,
    count: Option<u32>,
    json: bool,
) -> backlogapi::Result<()> {
    match entity {
        Entity::Issue => {
            let project_id: u64 = project.parse().map_err(|_| {
                BacklogError::InvalidId(format!("{project} (numeric project id required)"))
            })?;

            if offset.is_some() || count.is_some() {
                // A single explicit page
                let page =
                    get_issues_page(client, project_id, offset.unwrap_or(0), count.unwrap_or(20))
                        .await?;
                output_page(&page, json, |i| IssueRow::from(i))?;
            } else {
                // Every page, concatenated
                let issues = get_issues(client, project_id).await?;
                output_list(&issues, json, |i| IssueRow::from(i))?;
            }
        }
        Entity::Wiki => {
            let wikis = get_wikis(client, project).await?;
            output_list(&wikis, json, |w| WikiRow::from(w))?;
        }
        Entity::Project => {
            eprintln!("Error: Projects cannot be listed; fetch one by key");
            eprintln!("Hint: Use 'backlogapi get project <key>'");
            return Err(BacklogError::InvalidId("list project not supported".to_string()));
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_update(
    client: &BacklogClient,
    entity: Entity,
    id: &str,
    summary: Option<String>,
    description: Option<String>,
    name: Option<String>,
    content: Option<String>,
    json: bool,
) -> backlogapi::Result<()> {
    match entity {
        Entity::Issue => {
            if summary.is_none() && description.is_none() {
                return Err(BacklogError::Validation(
                    "nothing to update: pass --summary or --description".to_string(),
                ));
            }
            let params = IssueUpdateParams {
                summary,
                description,
            };
            let issue = Issue::update(client, id.to_string(), params).await?;
            output_single(&issue, json)?;
        }
        Entity::Wiki => {
            if name.is_none() && content.is_none() {
                return Err(BacklogError::Validation(
                    "nothing to update: pass --name or --content".to_string(),
                ));
            }
            let wiki_id = parse_wiki_id(id)?;
            let params = WikiUpdateParams { name, content };
            let wiki = Wiki::update(client, wiki_id, params).await?;
            output_single(&wiki, json)?;
        }
        Entity::Project => {
            eprintln!("Error: Projects cannot be updated via CLI");
            return Err(BacklogError::InvalidId(
                "update project not supported".to_string(),
            ));
        }
    }
    Ok(())
}

fn parse_wiki_id(id: &str) -> backlogapi::Result<u64> {
    id.parse()
        .map_err(|_| BacklogError::InvalidId(id.to_string()))
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> backlogapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> backlogapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        let rows: Vec<R> = page.items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        if page.has_more {
            println!("\nOffset {} (more available)", page.offset);
        } else {
            println!("\nOffset {} (end)", page.offset);
        }
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> backlogapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} items", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct IssueRow {
    key: String,
    status: String,
    summary: String,
}

impl From<&Issue> for IssueRow {
    fn from(i: &Issue) -> Self {
        Self {
            key: i.issue_key.clone(),
            status: i
                .status
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            summary: i.summary.clone(),
        }
    }
}

#[derive(Tabled)]
struct WikiRow {
    id: u64,
    name: String,
    updated: String,
}

impl From<&Wiki> for WikiRow {
    fn from(w: &Wiki) -> Self {
        Self {
            id: w.id,
            name: w.name.clone(),
            updated: w
                .updated
                .map(|u| u.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}
