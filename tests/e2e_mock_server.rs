//! E2E tests using the mock Backlog server.
//!
//! These tests exercise full workflows against the stateful mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use std::time::Duration;

use backlogapi::mock_server::{Fixtures, MockServer, MockState};
use backlogapi::{
    get_issues, get_wikis, BacklogClient, BacklogError, Get, Issue, IssueUpdateParams, Project,
    RetryPolicy, Update, Wiki, WikiUpdateParams,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_get_markdown_project() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let project = Project::get(&client, "TEST".to_string())
        .await
        .expect("Failed to get project");

    assert_eq!(project.project_key, "TEST");
    assert_eq!(project.name, "Test Project");
    assert!(project.uses_markdown());

    server.shutdown().await;
}

#[tokio::test]
async fn test_legacy_project_fails_validation() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let result = Project::get(&client, "LEGACY".to_string()).await;

    match result {
        Err(BacklogError::Validation(msg)) => assert!(msg.contains("markdown")),
        other => panic!("Expected validation error, got {other:?}"),
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_project_not_found() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let result = Project::get(&client, "MISSING".to_string()).await;

    assert!(result.is_err());
    let err = format!("{:?}", result.unwrap_err());
    assert!(
        err.contains("No project found") || err.contains("404"),
        "Error should indicate not found: {err}"
    );

    server.shutdown().await;
}

// =============================================================================
// Issue Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_and_get_issue_workflow() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    // Step 1: List all issues of the fixture project
    let issues = get_issues(&client, 1).await.expect("Failed to list issues");
    assert!(!issues.is_empty(), "Expected issues in default fixture");

    // Step 2: Get the first issue by its key
    let first = &issues[0];
    let issue = Issue::get(&client, first.issue_key.clone())
        .await
        .expect("Failed to get issue");

    assert_eq!(issue.id, first.id);
    assert_eq!(issue.summary, first.summary);

    server.shutdown().await;
}

#[tokio::test]
async fn test_pagination_across_multiple_pages() {
    // 140 issues: one full page plus a short page
    let mut state = MockState::new().with_project(Fixtures::markdown_project(1, "BIG", "Big"));
    for i in 1..=140u64 {
        state = state.with_issue(Fixtures::minimal_issue(
            i,
            &format!("BIG-{i}"),
            1,
            &format!("Issue {i}"),
        ));
    }

    let server = MockServer::with_state(state).await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let issues = get_issues(&client, 1).await.expect("Failed to list issues");

    assert_eq!(issues.len(), 140);
    // Concatenation preserves server order
    assert_eq!(issues[0].issue_key, "BIG-1");
    assert_eq!(issues[99].issue_key, "BIG-100");
    assert_eq!(issues[139].issue_key, "BIG-140");

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_project_returns_no_issues() {
    let state = MockState::new().with_project(Fixtures::markdown_project(5, "EMPTY", "Empty"));

    let server = MockServer::with_state(state).await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let issues = get_issues(&client, 5).await.expect("Failed to list issues");
    assert!(issues.is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_issue_workflow() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    // Step 1: Get original issue
    let original = Issue::get(&client, "TEST-3".to_string())
        .await
        .expect("Failed to get issue");
    assert_eq!(original.description, "");

    // Step 2: Update the description
    let params = IssueUpdateParams {
        description: Some("Now triaged weekly.".to_string()),
        ..Default::default()
    };
    let updated = Issue::update(&client, "TEST-3".to_string(), params)
        .await
        .expect("Failed to update issue");
    assert_eq!(updated.description, "Now triaged weekly.");

    // Step 3: Verify update persisted
    let fetched = Issue::get(&client, "TEST-3".to_string())
        .await
        .expect("Failed to get updated issue");
    assert_eq!(fetched.description, "Now triaged weekly.");

    server.shutdown().await;
}

// =============================================================================
// Wiki Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_wiki_list_get_update_workflow() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    // Step 1: List wikis by project key
    let wikis = get_wikis(&client, "TEST").await.expect("Failed to list wikis");
    assert_eq!(wikis.len(), 2);

    // Step 2: Get one by id
    let wiki = Wiki::get(&client, wikis[0].id)
        .await
        .expect("Failed to get wiki");
    assert_eq!(wiki.name, "Home");

    // Step 3: Update its content
    let params = WikiUpdateParams {
        content: Some("# Replaced".to_string()),
        ..Default::default()
    };
    let updated = Wiki::update(&client, wiki.id, params)
        .await
        .expect("Failed to update wiki");
    assert_eq!(updated.content, "# Replaced");

    // Step 4: Verify persistence
    let fetched = Wiki::get(&client, wiki.id).await.expect("Failed to re-get");
    assert_eq!(fetched.content, "# Replaced");

    server.shutdown().await;
}

#[tokio::test]
async fn test_wikis_listed_by_numeric_project_id() {
    let server = MockServer::start().await;
    let client = BacklogClient::new("test-key", server.url()).unwrap();

    let wikis = get_wikis(&client, "1").await.expect("Failed to list wikis");
    assert_eq!(wikis.len(), 2);

    server.shutdown().await;
}

// =============================================================================
// Rate Limiting Tests
// =============================================================================

fn rate_limited_state() -> MockState {
    MockState::new()
        .with_project(Fixtures::markdown_project(1, "RATE", "Rate"))
        .with_issue(Fixtures::minimal_issue(1, "RATE-1", 1, "Survives 429s"))
}

#[tokio::test]
async fn test_rate_limited_get_recovers() {
    let state = rate_limited_state().with_rate_limit_burst(2);
    let server = MockServer::with_state(state).await;

    let client = BacklogClient::new("test-key", server.url())
        .unwrap()
        .with_retry_policy(RetryPolicy::new(3, Duration::from_millis(10)));

    let issue = Issue::get(&client, "RATE-1".to_string())
        .await
        .expect("Retries should recover from the 429 burst");

    assert_eq!(issue.issue_key, "RATE-1");

    server.shutdown().await;
}

#[tokio::test]
async fn test_rate_limit_exhaustion_surfaces_error() {
    let state = rate_limited_state().with_rate_limit_burst(5);
    let server = MockServer::with_state(state).await;

    let client = BacklogClient::new("test-key", server.url())
        .unwrap()
        .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(10)));

    let result = Issue::get(&client, "RATE-1".to_string()).await;

    match result {
        Err(err) => assert!(err.is_rate_limit()),
        Ok(_) => panic!("Expected rate limit error"),
    }

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_api_key_is_rejected() {
    let state = MockState::new()
        .with_project(Fixtures::markdown_project(1, "SEC", "Secured"))
        .with_required_api_key("right-key");

    let server = MockServer::with_state(state).await;
    let client = BacklogClient::new("wrong-key", server.url()).unwrap();

    let result = Project::get(&client, "SEC".to_string()).await;

    match result {
        Err(BacklogError::ApiError { status_code, .. }) => {
            assert_eq!(status_code, Some(401));
        }
        other => panic!("Expected auth failure, got {other:?}"),
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_matching_api_key_is_accepted() {
    let state = MockState::new()
        .with_project(Fixtures::markdown_project(1, "SEC", "Secured"))
        .with_required_api_key("right-key");

    let server = MockServer::with_state(state).await;
    let client = BacklogClient::new("right-key", server.url()).unwrap();

    let project = Project::get(&client, "SEC".to_string())
        .await
        .expect("Correct key should authenticate");
    assert_eq!(project.project_key, "SEC");

    server.shutdown().await;
}
