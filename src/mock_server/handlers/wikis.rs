//! Wiki endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_api_key, error_body, not_found, too_many_requests};
use crate::mock_server::state::MockState;
use crate::Wiki;

/// Query parameters for listing wikis.
#[derive(Debug, Default, Deserialize)]
pub struct ListWikisQuery {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(rename = "projectIdOrKey")]
    pub project: Option<String>,
}

/// Query parameters for single-wiki requests.
#[derive(Debug, Default, Deserialize)]
pub struct WikiQuery {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Form parameters for updating a wiki.
#[derive(Debug, Deserialize)]
pub struct UpdateWikiForm {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// GET /wikis
pub async fn list_wikis(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListWikisQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    let Some(project) = query.project else {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body("projectIdOrKey is required")),
        )
            .into_response();
    };

    // The whole project in one response; the endpoint is unpaginated.
    let wikis: Vec<Wiki> = state.list_wikis(&project).into_iter().cloned().collect();
    (StatusCode::OK, Json(wikis)).into_response()
}

/// GET /wikis/{wikiId}
pub async fn get_wiki(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<WikiQuery>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    if state.take_rate_limit() {
        return too_many_requests();
    }

    match state.get_wiki(id) {
        Some(wiki) => (StatusCode::OK, Json(wiki.clone())).into_response(),
        None => not_found(format!("No wiki found: {id}")),
    }
}

/// PATCH /wikis/{wikiId}
pub async fn update_wiki(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<WikiQuery>,
    Form(form): Form<UpdateWikiForm>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if let Err(resp) = check_api_key(&state, query.api_key.as_deref()) {
        return resp;
    }

    if state.take_rate_limit() {
        return too_many_requests();
    }

    match state.update_wiki(id, form.name, form.content) {
        Some(wiki) => (StatusCode::OK, Json(wiki.clone())).into_response(),
        None => not_found(format!("No wiki found: {id}")),
    }
}
