//! Issue model and trait implementations.
//!
//! Issues are the trackable work items of a project. The remote API may
//! omit or null the description field; the model normalizes it to an empty
//! string at the response boundary so callers never see an absent value.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::BacklogClient;
use crate::error::{BacklogError, Result};
use crate::pagination::Page;
use crate::retry::with_retry;
use crate::traits::{Get, List, Update};

/// A Backlog issue.
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, Issue, Get, List, IssueListQuery};
///
/// let client = BacklogClient::from_env()?;
///
/// // Fetch a single issue by key
/// let issue = Issue::get(&client, "DEMO-42".to_string()).await?;
/// println!("{}: {}", issue.issue_key, issue.summary);
///
/// // Fetch every issue of a project
/// let query = IssueListQuery { project_id: Some(1), ..Default::default() };
/// let issues = Issue::list_all(&client, &query).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Numeric issue ID.
    pub id: u64,

    /// Project this issue belongs to.
    pub project_id: u64,

    /// The issue key (e.g., "DEMO-42").
    pub issue_key: String,

    /// One-line summary.
    pub summary: String,

    /// Issue description; empty string when the remote field is unset.
    #[serde(default)]
    pub description: String,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,

    /// When the issue was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the issue was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Issue {
    /// Whether the issue has a non-empty description.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Workflow status of an issue (e.g., "Open", "Closed").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStatus {
    /// Status ID.
    pub id: u64,
    /// Status display name.
    pub name: String,
}

/// Issue payload as returned by the remote API.
///
/// The description is optional on the wire; conversion into [`Issue`]
/// defaults it to an empty string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueResponse {
    id: u64,
    project_id: u64,
    issue_key: String,
    summary: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<IssueStatus>,
    #[serde(default)]
    created: Option<DateTime<Utc>>,
    #[serde(default)]
    updated: Option<DateTime<Utc>>,
}

impl From<IssueResponse> for Issue {
    fn from(raw: IssueResponse) -> Self {
        Issue {
            id: raw.id,
            project_id: raw.project_id,
            issue_key: raw.issue_key,
            summary: raw.summary,
            description: raw.description.unwrap_or_default(),
            status: raw.status,
            created: raw.created,
            updated: raw.updated,
        }
    }
}

/// Query parameters for listing issues.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueListQuery {
    /// Project to scope the listing to.
    #[serde(rename = "projectId[]", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
}

/// Parameters for updating an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdateParams {
    /// New one-line summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

#[async_trait]
impl Get for Issue {
    type Id = String; // Issue key or numeric id

    #[tracing::instrument(skip(client))]
    async fn get(client: &BacklogClient, id: String) -> Result<Self> {
        let path = format!("issues/{}", urlencoding::encode(&id));

        let response = with_retry(client.retry_policy(), || client.get(&path)).await?;
        let raw: IssueResponse = response.json().await.map_err(BacklogError::HttpError)?;
        Ok(raw.into())
    }
}

#[async_trait]
impl List for Issue {
    type Query = IssueListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &BacklogClient,
        query: &Self::Query,
        offset: u64,
        count: u32,
    ) -> Result<Page<Self>> {
        #[derive(Serialize)]
        struct RequestParams {
            #[serde(rename = "projectId[]", skip_serializing_if = "Option::is_none")]
            project_id: Option<u64>,
            offset: u64,
            count: u32,
        }

        let params = RequestParams {
            project_id: query.project_id,
            offset,
            count,
        };

        let response = client.get_with_query("issues", &params).await?;
        // The issues endpoint returns a bare array, no envelope.
        let raw: Vec<IssueResponse> = response.json().await.map_err(BacklogError::HttpError)?;
        let items = raw.into_iter().map(Issue::from).collect();

        Ok(Page::new(items, offset, count))
    }
}

#[async_trait]
impl Update for Issue {
    type Id = String; // Issue key or numeric id
    type Params = IssueUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &BacklogClient, id: String, params: Self::Params) -> Result<Self> {
        let path = format!("issues/{}", urlencoding::encode(&id));

        let response = with_retry(client.retry_policy(), || client.patch(&path, &params)).await?;
        let raw: IssueResponse = response.json().await.map_err(BacklogError::HttpError)?;
        Ok(raw.into())
    }
}

// =============================================================================
// CONVENIENCE FUNCTIONS
// =============================================================================

/// Fetch all issues of a project, walking every page.
///
/// # Arguments
///
/// * `client` - The Backlog API client
/// * `project_id` - Numeric project ID to scope the listing to
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, get_issues};
///
/// let client = BacklogClient::from_env()?;
/// let issues = get_issues(&client, 1).await?;
/// println!("{} issues", issues.len());
/// ```
pub async fn get_issues(client: &BacklogClient, project_id: u64) -> Result<Vec<Issue>> {
    let query = IssueListQuery {
        project_id: Some(project_id),
    };
    Issue::list_all(client, &query).await
}

/// Fetch a single page of issues for a project.
///
/// # Arguments
///
/// * `client` - The Backlog API client
/// * `project_id` - Numeric project ID to scope the listing to
/// * `offset` - Offset of the first item to return
/// * `count` - Number of items per page
pub async fn get_issues_page(
    client: &BacklogClient,
    project_id: u64,
    offset: u64,
    count: u32,
) -> Result<Page<Issue>> {
    let query = IssueListQuery {
        project_id: Some(project_id),
    };
    Issue::list_page(client, &query, offset, count).await
}
