//! Project model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::BacklogClient;
use crate::error::{BacklogError, Result};
use crate::traits::Get;

/// The only text formatting rule this client supports.
///
/// Issue descriptions and wiki content are treated as markdown documents,
/// so projects configured with the legacy "backlog" rule are rejected at
/// fetch time.
pub const MARKDOWN_RULE: &str = "markdown";

/// A Backlog project.
///
/// Projects are the top-level containers for issues and wikis. The
/// projection is an immutable snapshot; re-fetch to observe remote changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric project ID.
    pub id: u64,

    /// The project key (e.g., "DEMO").
    pub project_key: String,

    /// Human-readable project name.
    pub name: String,

    /// Text formatting rule: "markdown" or the legacy "backlog".
    pub text_formatting_rule: String,

    /// Whether the project has been archived.
    #[serde(default)]
    pub archived: bool,
}

impl Project {
    /// Whether the project renders text as markdown.
    pub fn uses_markdown(&self) -> bool {
        self.text_formatting_rule == MARKDOWN_RULE
    }
}

#[async_trait]
impl Get for Project {
    type Id = String; // Project key or numeric id

    /// Fetch a project and validate its text formatting rule.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogError::Validation`] if the project is not configured
    /// for markdown formatting.
    #[tracing::instrument(skip(client))]
    async fn get(client: &BacklogClient, key: String) -> Result<Self> {
        let path = format!("projects/{}", urlencoding::encode(&key));

        let response = client.get(&path).await?;
        let project: Project = response.json().await.map_err(BacklogError::HttpError)?;

        if !project.uses_markdown() {
            tracing::warn!(
                project_key = %project.project_key,
                rule = %project.text_formatting_rule,
                "project rejected: formatting rule is not markdown"
            );
            return Err(BacklogError::Validation(format!(
                "project '{}' uses '{}' formatting, expected '{}'",
                project.project_key, project.text_formatting_rule, MARKDOWN_RULE
            )));
        }

        tracing::debug!(project_key = %project.project_key, "project formatting rule validated");
        Ok(project)
    }
}
