//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_api_key, not_found};
use crate::mock_server::state::MockState;

/// Query parameters for getting a project.
#[derive(Debug, Default, Deserialize)]
pub struct GetProjectQuery {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

/// GET /projects/{projectIdOrKey}
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(key_or_id): Path<String>,
    Query(query): Query<GetProjectQuery>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&key_or_id)
        .map(|s| s.into_owned())
        .unwrap_or(key_or_id);

    let state = state.read().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    match state.get_project(&decoded) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => not_found(format!("No project found: {decoded}")),
    }
}
