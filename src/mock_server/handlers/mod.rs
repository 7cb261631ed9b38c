//! HTTP handlers for the mock Backlog API server.

mod issues;
mod projects;
mod wikis;

pub use issues::{get_issue, list_issues, update_issue};
pub use projects::get_project;
pub use wikis::{get_wiki, list_wikis, update_wiki};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::mock_server::state::MockState;

/// Backlog-shaped error envelope.
pub(crate) fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "errors": [
            {"message": message, "code": 0, "moreInfo": ""}
        ]
    })
}

pub(crate) fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(error_body(&message))).into_response()
}

pub(crate) fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(error_body("Authentication failure")),
    )
        .into_response()
}

pub(crate) fn too_many_requests() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(error_body("Too Many Requests")),
    )
        .into_response()
}

/// Check the `apiKey` query parameter against the configured requirement.
pub(crate) fn check_api_key(state: &MockState, api_key: Option<&str>) -> Result<(), Response> {
    if state.authorize(api_key) {
        Ok(())
    } else {
        Err(unauthorized())
    }
}
