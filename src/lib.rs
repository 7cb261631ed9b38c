//! Backlog API client library.
//!
//! A Rust library for interacting with the Backlog REST API (issue tracker
//! and wiki) using a trait-based architecture where each operation (Get,
//! List, Update) is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use backlogapi::{BacklogClient, Get, Project, get_issues, get_wikis};
//!
//! #[tokio::main]
//! async fn main() -> backlogapi::Result<()> {
//!     // Create client from environment variables
//!     let client = BacklogClient::from_env()?;
//!
//!     // Fetch a project; fails unless it uses markdown formatting
//!     let project = Project::get(&client, "DEMO".to_string()).await?;
//!     println!("Project: {}", project.name);
//!
//!     // Fetch every issue of the project (paginated under the hood)
//!     let issues = get_issues(&client, project.id).await?;
//!     println!("Found {} issues", issues.len());
//!
//!     // Fetch the project's wiki pages (single request)
//!     let wikis = get_wikis(&client, &project.project_key).await?;
//!     println!("Found {} wikis", wikis.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around three core traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch paginated collections of entities
//! - [`Update`] - Modify an existing entity
//!
//! Each entity type ([`Project`], [`Issue`], [`Wiki`]) implements the
//! traits supported by its API endpoints. Rate-limit-sensitive single-item
//! operations retry with a fixed delay; see [`RetryPolicy`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `BACKLOG_API_KEY` (required) - Your Backlog API key
//! - `BACKLOG_HOST` (required) - Space host (e.g., `example.backlog.jp`)

mod client;
mod error;
mod models;
mod pagination;
mod retry;
mod traits;

pub mod cli;
pub mod mcp;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::BacklogClient;
pub use error::{BacklogError, Result};
pub use pagination::{Page, PaginationParams};
pub use retry::{with_retry, RetryPolicy};

// Re-export traits
pub use traits::{Get, List, Update, DEFAULT_PAGE_SIZE};

// Re-export output formatting
pub use output::PrettyPrint;

// Re-export models
pub use models::{
    // Project types
    Project,
    MARKDOWN_RULE,
    // Issue types
    Issue,
    IssueListQuery,
    IssueStatus,
    IssueUpdateParams,
    // Wiki types
    Wiki,
    WikiUpdateParams,
};

// Re-export convenience functions
pub use models::{get_issues, get_issues_page, get_wikis};
