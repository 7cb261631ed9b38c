//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Backlog API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Issue, Project, Wiki};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by project key (e.g., "TEST").
    pub projects: HashMap<String, Project>,

    /// Issues in insertion order (the order the list endpoint serves).
    pub issues: Vec<Issue>,

    /// Wikis indexed by ID.
    pub wikis: HashMap<u64, Wiki>,

    /// Optional API key. If set, requests must carry it as `apiKey`.
    pub required_api_key: Option<String>,

    /// Number of upcoming single-item requests to reject with HTTP 429.
    pub rate_limit_burst: u32,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.project_key.clone(), project);
        self
    }

    /// Add an issue to the state.
    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    /// Add a wiki to the state.
    pub fn with_wiki(mut self, wiki: Wiki) -> Self {
        self.wikis.insert(wiki.id, wiki);
        self
    }

    /// Require requests to carry this API key.
    pub fn with_required_api_key(mut self, api_key: &str) -> Self {
        self.required_api_key = Some(api_key.to_string());
        self
    }

    /// Reject the next `n` single-item requests with HTTP 429.
    pub fn with_rate_limit_burst(mut self, n: u32) -> Self {
        self.rate_limit_burst = n;
        self
    }

    /// Whether a request with the given key is allowed.
    pub fn authorize(&self, api_key: Option<&str>) -> bool {
        match &self.required_api_key {
            Some(required) => api_key == Some(required.as_str()),
            None => true,
        }
    }

    /// Consume one forced rate-limit rejection, if any remain.
    pub fn take_rate_limit(&mut self) -> bool {
        if self.rate_limit_burst > 0 {
            self.rate_limit_burst -= 1;
            true
        } else {
            false
        }
    }

    /// Get a project by key or numeric id.
    pub fn get_project(&self, key_or_id: &str) -> Option<&Project> {
        if let Ok(id) = key_or_id.parse::<u64>() {
            return self.projects.values().find(|p| p.id == id);
        }
        self.projects.get(key_or_id)
    }

    /// Get an issue by key or numeric id.
    pub fn get_issue(&self, key_or_id: &str) -> Option<&Issue> {
        if let Ok(id) = key_or_id.parse::<u64>() {
            return self.issues.iter().find(|i| i.id == id);
        }
        self.issues.iter().find(|i| i.issue_key == key_or_id)
    }

    /// List issues, optionally filtered by project id, in insertion order.
    pub fn list_issues(&self, project_id: Option<u64>) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| project_id.map(|pid| i.project_id == pid).unwrap_or(true))
            .collect()
    }

    /// Update an issue and return the updated version.
    pub fn update_issue(
        &mut self,
        key_or_id: &str,
        summary: Option<String>,
        description: Option<String>,
    ) -> Option<&Issue> {
        let id = key_or_id.parse::<u64>().ok();
        let issue = self
            .issues
            .iter_mut()
            .find(|i| Some(i.id) == id || i.issue_key == key_or_id)?;

        if let Some(s) = summary {
            issue.summary = s;
        }
        if let Some(d) = description {
            issue.description = d;
        }
        Some(issue)
    }

    /// Get a wiki by ID.
    pub fn get_wiki(&self, id: u64) -> Option<&Wiki> {
        self.wikis.get(&id)
    }

    /// List wikis of a project (key or numeric id), ordered by wiki id.
    pub fn list_wikis(&self, project_key_or_id: &str) -> Vec<&Wiki> {
        let project_id = self.get_project(project_key_or_id).map(|p| p.id);
        let mut wikis: Vec<&Wiki> = self
            .wikis
            .values()
            .filter(|w| project_id.map(|pid| w.project_id == pid).unwrap_or(false))
            .collect();
        wikis.sort_by_key(|w| w.id);
        wikis
    }

    /// Update a wiki and return the updated version.
    pub fn update_wiki(
        &mut self,
        id: u64,
        name: Option<String>,
        content: Option<String>,
    ) -> Option<&Wiki> {
        let wiki = self.wikis.get_mut(&id)?;
        if let Some(n) = name {
            wiki.name = n;
        }
        if let Some(c) = content {
            wiki.content = c;
        }
        Some(wiki)
    }
}
