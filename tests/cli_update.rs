//! Execution tests for update operations.
//!
//! Uses wiremock to mock the Backlog API. Updates are PATCH requests with
//! form-encoded bodies.

use backlogapi::{BacklogClient, Issue, IssueUpdateParams, Update, Wiki, WikiUpdateParams};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_update_issue_description() {
    let mock_server = MockServer::start().await;

    let updated_issue = serde_json::json!({
        "id": 42,
        "projectId": 1,
        "issueKey": "DEMO-42",
        "summary": "Fix pagination",
        "description": "Rewritten description"
    });

    Mock::given(method("PATCH"))
        .and(path("/issues/DEMO-42"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string_contains("description=Rewritten+description"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated_issue))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let params = IssueUpdateParams {
        description: Some("Rewritten description".to_string()),
        ..Default::default()
    };

    let issue = Issue::update(&client, "DEMO-42".to_string(), params)
        .await
        .unwrap();

    assert_eq!(issue.description, "Rewritten description");
    assert_eq!(issue.issue_key, "DEMO-42");
}

#[tokio::test]
async fn test_update_issue_omits_unset_fields() {
    let mock_server = MockServer::start().await;

    let updated_issue = serde_json::json!({
        "id": 42,
        "projectId": 1,
        "issueKey": "DEMO-42",
        "summary": "Only the summary changed",
        "description": ""
    });

    Mock::given(method("PATCH"))
        .and(path("/issues/42"))
        .and(body_string_contains("summary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated_issue))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let params = IssueUpdateParams {
        summary: Some("Only the summary changed".to_string()),
        ..Default::default()
    };

    let issue = Issue::update(&client, "42".to_string(), params)
        .await
        .unwrap();

    assert_eq!(issue.summary, "Only the summary changed");
}

#[tokio::test]
async fn test_update_wiki_content() {
    let mock_server = MockServer::start().await;

    let updated_wiki = serde_json::json!({
        "id": 11,
        "projectId": 1,
        "name": "Home",
        "content": "# Updated home page"
    });

    Mock::given(method("PATCH"))
        .and(path("/wikis/11"))
        .and(body_string_contains("content=%23+Updated+home+page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated_wiki))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BacklogClient::new("test-key", &mock_server.uri()).unwrap();
    let params = WikiUpdateParams {
        content: Some("# Updated home page".to_string()),
        ..Default::default()
    };

    let wiki = Wiki::update(&client, 11, params).await.unwrap();

    assert_eq!(wiki.content, "# Updated home page");
}
