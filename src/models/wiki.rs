//! Wiki model and trait implementations.
//!
//! Wikis are named documents scoped to a project. Unlike issues, the wikis
//! list endpoint is unpaginated: one request returns every page of the
//! project, so listing is exposed as a plain function rather than through
//! the `List` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::BacklogClient;
use crate::error::{BacklogError, Result};
use crate::retry::with_retry;
use crate::traits::{Get, Update};

/// A Backlog wiki page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wiki {
    /// Numeric wiki ID.
    pub id: u64,

    /// Project this wiki belongs to.
    pub project_id: u64,

    /// Page name.
    pub name: String,

    /// Page content; empty string when the remote field is unset.
    ///
    /// The list endpoint omits content; fetch the wiki individually to
    /// obtain it.
    #[serde(default)]
    pub content: String,

    /// When the page was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the page was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Wiki payload as returned by the remote API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WikiResponse {
    id: u64,
    project_id: u64,
    name: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    created: Option<DateTime<Utc>>,
    #[serde(default)]
    updated: Option<DateTime<Utc>>,
}

impl From<WikiResponse> for Wiki {
    fn from(raw: WikiResponse) -> Self {
        Wiki {
            id: raw.id,
            project_id: raw.project_id,
            name: raw.name,
            content: raw.content.unwrap_or_default(),
            created: raw.created,
            updated: raw.updated,
        }
    }
}

/// Parameters for updating a wiki page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WikiUpdateParams {
    /// New page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New page content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[async_trait]
impl Get for Wiki {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &BacklogClient, id: Self::Id) -> Result<Self> {
        let path = format!("wikis/{id}");

        let response = with_retry(client.retry_policy(), || client.get(&path)).await?;
        let raw: WikiResponse = response.json().await.map_err(BacklogError::HttpError)?;
        Ok(raw.into())
    }
}

#[async_trait]
impl Update for Wiki {
    type Id = u64;
    type Params = WikiUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &BacklogClient, id: Self::Id, params: Self::Params) -> Result<Self> {
        let path = format!("wikis/{id}");

        let response = with_retry(client.retry_policy(), || client.patch(&path, &params)).await?;
        let raw: WikiResponse = response.json().await.map_err(BacklogError::HttpError)?;
        Ok(raw.into())
    }
}

/// Fetch every wiki page of a project.
///
/// One request, no pagination: the endpoint returns the project's full
/// page list at once.
///
/// # Arguments
///
/// * `client` - The Backlog API client
/// * `project` - Project key or numeric id
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, get_wikis};
///
/// let client = BacklogClient::from_env()?;
/// let wikis = get_wikis(&client, "DEMO").await?;
/// for wiki in wikis {
///     println!("{}: {}", wiki.id, wiki.name);
/// }
/// ```
#[tracing::instrument(skip(client))]
pub async fn get_wikis(client: &BacklogClient, project: &str) -> Result<Vec<Wiki>> {
    #[derive(Serialize)]
    struct RequestParams<'a> {
        #[serde(rename = "projectIdOrKey")]
        project: &'a str,
    }

    let response = client
        .get_with_query("wikis", &RequestParams { project })
        .await?;
    let raw: Vec<WikiResponse> = response.json().await.map_err(BacklogError::HttpError)?;
    Ok(raw.into_iter().map(Wiki::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_deserialize_with_content() {
        let json = r##"{
            "id": 5,
            "projectId": 1,
            "name": "Home",
            "content": "# Welcome",
            "created": "2024-01-10T08:00:00Z",
            "updated": "2024-02-01T12:00:00Z"
        }"##;

        let wiki: Wiki = serde_json::from_str::<WikiResponse>(json).unwrap().into();
        assert_eq!(wiki.id, 5);
        assert_eq!(wiki.name, "Home");
        assert_eq!(wiki.content, "# Welcome");
        assert!(wiki.updated.is_some());
    }

    #[test]
    fn test_list_payload_without_content_defaults_to_empty() {
        // The list endpoint omits content entirely.
        let json = r#"{"id": 6, "projectId": 1, "name": "Roadmap"}"#;

        let wiki: Wiki = serde_json::from_str::<WikiResponse>(json).unwrap().into();
        assert_eq!(wiki.content, "");
    }

    #[test]
    fn test_null_content_defaults_to_empty() {
        let json = r#"{"id": 7, "projectId": 1, "name": "Notes", "content": null}"#;

        let wiki: Wiki = serde_json::from_str::<WikiResponse>(json).unwrap().into();
        assert_eq!(wiki.content, "");
    }

    #[test]
    fn test_wiki_update_params_skip_unset() {
        let params = WikiUpdateParams {
            content: Some("# Updated".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"content": "# Updated"}));
    }
}
