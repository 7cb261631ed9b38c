//! Mock Backlog API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Backlog
//! API for integration and end-to-end testing. Unlike wiremock which mocks
//! at the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing (update an issue, fetch it back).
//!
//! # Example
//!
//! ```ignore
//! use backlogapi::mock_server::MockServer;
//! use backlogapi::{BacklogClient, Project, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BacklogClient::new("test-key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, "TEST".to_string()).await.unwrap();
//!     assert_eq!(project.name, "Test Project");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
