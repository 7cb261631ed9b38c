//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! backlogapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Backlog API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "backlogapi", about = "Backlog API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by key or ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// Project key, issue key, or numeric ID (wikis are numeric only).
        id: String,
    },

    /// List entities of a project.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Project key or numeric ID (numeric required for issues).
        #[arg(long)]
        project: String,

        /// Offset of the first item (issues only; fetches a single page).
        #[arg(long)]
        offset: Option<u64>,

        /// Number of items per page (issues only; fetches a single page).
        #[arg(long)]
        count: Option<u32>,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// Issue key or numeric ID (wikis are numeric only).
        id: String,

        /// New summary (issues).
        #[arg(long)]
        summary: Option<String>,

        /// New description (issues).
        #[arg(long)]
        description: Option<String>,

        /// New page name (wikis).
        #[arg(long)]
        name: Option<String>,

        /// New page content (wikis).
        #[arg(long)]
        content: Option<String>,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A Backlog project.
    #[value(alias = "projects")]
    Project,
    /// A trackable work item.
    #[value(alias = "issues")]
    Issue,
    /// A wiki page.
    #[value(alias = "wikis")]
    Wiki,
}
