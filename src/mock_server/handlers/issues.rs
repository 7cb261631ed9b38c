//! Issue endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_api_key, not_found, too_many_requests};
use crate::mock_server::state::MockState;
use crate::Issue;

/// Query parameters for listing issues.
#[derive(Debug, Default, Deserialize)]
pub struct ListIssuesQuery {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(rename = "projectId[]")]
    pub project_id: Option<u64>,
    pub offset: Option<u64>,
    pub count: Option<u32>,
}

/// Query parameters for single-issue requests.
#[derive(Debug, Default, Deserialize)]
pub struct IssueQuery {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Form parameters for updating an issue.
#[derive(Debug, Deserialize)]
pub struct UpdateIssueForm {
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// GET /issues
pub async fn list_issues(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListIssuesQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    let offset = query.offset.unwrap_or(0) as usize;
    let count = query.count.unwrap_or(20) as usize;

    let all = state.list_issues(query.project_id);
    let page: Vec<Issue> = all
        .into_iter()
        .skip(offset)
        .take(count)
        .cloned()
        .collect();

    // Bare array, matching the real endpoint.
    (StatusCode::OK, Json(page)).into_response()
}

/// GET /issues/{issueIdOrKey}
pub async fn get_issue(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(key_or_id): Path<String>,
    Query(query): Query<IssueQuery>,
) -> impl IntoResponse {
    // Write lock: forced rate-limit rejections drain a counter.
    let mut state = state.write().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    if state.take_rate_limit() {
        return too_many_requests();
    }

    match state.get_issue(&key_or_id) {
        Some(issue) => (StatusCode::OK, Json(issue.clone())).into_response(),
        None => not_found(format!("No issue found: {key_or_id}")),
    }
}

/// PATCH /issues/{issueIdOrKey}
pub async fn update_issue(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(key_or_id): Path<String>,
    Query(query): Query<IssueQuery>,
    Form(form): Form<UpdateIssueForm>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    if state.take_rate_limit() {
        return too_many_requests();
    }

    match state.update_issue(&key_or_id, form.summary, form.description) {
        Some(issue) => (StatusCode::OK, Json(issue.clone())).into_response(),
        None => not_found(format!("No issue found: {key_or_id}")),
    }
}
