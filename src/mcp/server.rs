//! MCP Server handler for the Backlog API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use std::sync::Arc;

use crate::{
    mcp::{EntityType, GetParams, ListParams, UpdateParams},
    get_issues_page, get_wikis, BacklogClient, BacklogError, Get, Issue, IssueUpdateParams,
    Project, Update, Wiki, WikiUpdateParams,
};

/// Backlog MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to interact
/// with the Backlog API through the Model Context Protocol.
///
/// # Tools
///
/// - `get` - Fetch a single entity by key or ID
/// - `list` - List issues (paginated) or wikis of a project
/// - `update` - Update an issue or wiki
///
/// # Example
///
/// ```no_run
/// use backlogapi::mcp::BacklogServer;
///
/// # fn main() -> backlogapi::Result<()> {
/// let server = BacklogServer::from_env()?;
/// // Server can now be used with rmcp transport
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BacklogServer {
    client: Arc<BacklogClient>,
}

impl BacklogServer {
    /// Create a new BacklogServer from environment variables.
    ///
    /// Uses `BACKLOG_API_KEY` for authentication and `BACKLOG_HOST` for
    /// the space host.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> crate::Result<Self> {
        let client = BacklogClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new BacklogServer with an existing client.
    pub fn new(client: BacklogClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert BacklogError to McpError.
    fn to_mcp_error(err: BacklogError) -> McpError {
        match &err {
            BacklogError::ConfigMissing(msg) => McpError::invalid_params(msg.clone(), None),
            BacklogError::Validation(msg) => McpError::invalid_params(msg.clone(), None),
            BacklogError::InvalidId(id) => {
                McpError::invalid_params(format!("Invalid id: {id}"), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `get` tool.
    pub async fn handle_get(&self, params: GetParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Project => {
                let project = Project::get(&self.client, params.id)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&project)
            }
            EntityType::Issue => {
                let issue = Issue::get(&self.client, params.id)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&issue)
            }
            EntityType::Wiki => {
                let id: u64 = params
                    .id
                    .parse()
                    .map_err(|_| McpError::invalid_params("Wiki ID must be a number", None))?;
                let wiki = Wiki::get(&self.client, id)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&wiki)
            }
        }
    }

    /// Handle the `list` tool.
    pub async fn handle_list(&self, params: ListParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Issue => {
                let project_id: u64 = params.project.parse().map_err(|_| {
                    McpError::invalid_params(
                        "project must be a numeric project id for listing issues",
                        None,
                    )
                })?;
                let offset = params.offset.unwrap_or(0);
                let count = params.count.unwrap_or(20).min(100);
                let page = get_issues_page(&self.client, project_id, offset, count)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&page)
            }
            EntityType::Wiki => {
                let wikis = get_wikis(&self.client, &params.project)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&wikis)
            }
            EntityType::Project => Err(McpError::invalid_params(
                "Projects cannot be listed; fetch one by key with the get tool",
                None,
            )),
        }
    }

    /// Handle the `update` tool.
    pub async fn handle_update(&self, params: UpdateParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Issue => {
                let update_params = IssueUpdateParams {
                    summary: params.summary,
                    description: params.description,
                };
                let issue = Issue::update(&self.client, params.id, update_params)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&issue)
            }
            EntityType::Wiki => {
                let id: u64 = params
                    .id
                    .parse()
                    .map_err(|_| McpError::invalid_params("Wiki ID must be a number", None))?;
                let update_params = WikiUpdateParams {
                    name: params.name,
                    content: params.content,
                };
                let wiki = Wiki::update(&self.client, id, update_params)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::to_json_result(&wiki)
            }
            EntityType::Project => Err(McpError::invalid_params(
                "Update not supported for Project",
                None,
            )),
        }
    }
}

impl ServerHandler for BacklogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "backlogapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Backlog API MCP Server - Fetch projects, issues, and wikis; \
                 update issue descriptions and wiki content."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "get",
                "Fetch a single Backlog entity. \
                 Supports: project (by key), issue (by key or numeric ID), \
                 wiki (by numeric ID). Fetching a project fails unless it \
                 uses markdown formatting.",
                Self::schema::<GetParams>(),
            ),
            Tool::new(
                "list",
                "List Backlog entities of a project. \
                 Issues: project = numeric project id, offset/count paginate. \
                 Wikis: project = key or id, one unpaginated response.",
                Self::schema::<ListParams>(),
            ),
            Tool::new(
                "update",
                "Update a Backlog entity. \
                 Issues: summary, description. Wikis: name, content.",
                Self::schema::<UpdateParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "get" => {
                let params: GetParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_get(params).await
            }
            "list" => {
                let params: ListParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_list(params).await
            }
            "update" => {
                let params: UpdateParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_update(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
