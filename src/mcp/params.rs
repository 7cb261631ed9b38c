//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Entity types supported by MCP tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Backlog project.
    Project,
    /// Trackable work item.
    Issue,
    /// Wiki page.
    Wiki,
}

/// Parameters for the `get` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetParams {
    /// The type of entity to fetch.
    pub entity: EntityType,
    /// The entity identifier (project key, issue key, or numeric ID).
    pub id: String,
}

/// Parameters for the `list` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListParams {
    /// The type of entity to list (issue or wiki).
    pub entity: EntityType,
    /// Project to list from (numeric id for issues; key or id for wikis).
    pub project: String,
    /// Offset of the first item (issues only).
    #[serde(default)]
    pub offset: Option<u64>,
    /// Number of items per page (issues only; max 100).
    #[serde(default)]
    pub count: Option<u32>,
}

/// Parameters for the `update` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateParams {
    /// The type of entity to update (issue or wiki).
    pub entity: EntityType,
    /// The entity identifier (issue key or numeric ID).
    pub id: String,
    /// New summary (issue only).
    #[serde(default)]
    pub summary: Option<String>,
    /// New description (issue only).
    #[serde(default)]
    pub description: Option<String>,
    /// New page name (wiki only).
    #[serde(default)]
    pub name: Option<String>,
    /// New page content (wiki only).
    #[serde(default)]
    pub content: Option<String>,
}
