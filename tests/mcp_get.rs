//! Tests for the MCP `get` and `update` tool handlers.
//!
//! Uses wiremock to mock the Backlog API behind the MCP server.

use backlogapi::mcp::{BacklogServer, EntityType, GetParams, UpdateParams};
use backlogapi::BacklogClient;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn content_text(result: &rmcp::model::CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(t) => &t.text,
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn handle_get_project_returns_json() {
    let mock_server = MockServer::start().await;

    let project_json = serde_json::json!({
        "id": 1,
        "projectKey": "DEMO",
        "name": "Demo Project",
        "textFormattingRule": "markdown"
    });

    Mock::given(method("GET"))
        .and(path("/projects/DEMO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&project_json))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_get(GetParams {
            entity: EntityType::Project,
            id: "DEMO".to_string(),
        })
        .await
        .unwrap();

    assert!(!result.is_error.unwrap_or(false));
    let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(parsed["projectKey"], "DEMO");
}

#[tokio::test]
async fn handle_get_legacy_project_is_invalid_params() {
    let mock_server = MockServer::start().await;

    let project_json = serde_json::json!({
        "id": 2,
        "projectKey": "LEGACY",
        "name": "Legacy",
        "textFormattingRule": "backlog"
    });

    Mock::given(method("GET"))
        .and(path("/projects/LEGACY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&project_json))
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_get(GetParams {
            entity: EntityType::Project,
            id: "LEGACY".to_string(),
        })
        .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("markdown"));
}

#[tokio::test]
async fn handle_get_issue_returns_json() {
    let mock_server = MockServer::start().await;

    let issue_json = serde_json::json!({
        "id": 42,
        "projectId": 1,
        "issueKey": "DEMO-42",
        "summary": "Fix pagination"
    });

    Mock::given(method("GET"))
        .and(path("/issues/DEMO-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&issue_json))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_get(GetParams {
            entity: EntityType::Issue,
            id: "DEMO-42".to_string(),
        })
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(parsed["issueKey"], "DEMO-42");
    // Missing description is normalized, not absent
    assert_eq!(parsed["description"], "");
}

#[tokio::test]
async fn handle_get_wiki_requires_numeric_id() {
    let mock_server = MockServer::start().await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_get(GetParams {
            entity: EntityType::Wiki,
            id: "not-a-number".to_string(),
        })
        .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.to_lowercase().contains("number"));
}

#[tokio::test]
async fn handle_update_issue_patches_description() {
    let mock_server = MockServer::start().await;

    let updated = serde_json::json!({
        "id": 42,
        "projectId": 1,
        "issueKey": "DEMO-42",
        "summary": "Fix pagination",
        "description": "Rewritten"
    });

    Mock::given(method("PATCH"))
        .and(path("/issues/DEMO-42"))
        .and(body_string_contains("description=Rewritten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_update(UpdateParams {
            entity: EntityType::Issue,
            id: "DEMO-42".to_string(),
            summary: None,
            description: Some("Rewritten".to_string()),
            name: None,
            content: None,
        })
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(parsed["description"], "Rewritten");
}

#[tokio::test]
async fn handle_update_wiki_patches_content() {
    let mock_server = MockServer::start().await;

    let updated = serde_json::json!({
        "id": 11,
        "projectId": 1,
        "name": "Home",
        "content": "# New"
    });

    Mock::given(method("PATCH"))
        .and(path("/wikis/11"))
        .and(body_string_contains("content=%23+New"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let server = BacklogServer::new(client);

    let result = server
        .handle_update(UpdateParams {
            entity: EntityType::Wiki,
            id: "11".to_string(),
            summary: None,
            description: None,
            name: None,
            content: Some("# New".to_string()),
        })
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
    assert_eq!(parsed["content"], "# New");
}
