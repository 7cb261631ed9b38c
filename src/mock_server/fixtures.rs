//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Issue, IssueStatus, Project, Wiki};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a markdown-formatted project.
    pub fn markdown_project(id: u64, key: &str, name: &str) -> Project {
        Project {
            id,
            project_key: key.to_string(),
            name: name.to_string(),
            text_formatting_rule: "markdown".to_string(),
            archived: false,
        }
    }

    /// Create a project with an arbitrary formatting rule.
    pub fn project_with_rule(id: u64, key: &str, name: &str, rule: &str) -> Project {
        let mut project = Self::markdown_project(id, key, name);
        project.text_formatting_rule = rule.to_string();
        project
    }

    // =========================================================================
    // Issue Fixtures
    // =========================================================================

    /// Create a minimal open issue with an empty description.
    pub fn minimal_issue(id: u64, key: &str, project_id: u64, summary: &str) -> Issue {
        Issue {
            id,
            project_id,
            issue_key: key.to_string(),
            summary: summary.to_string(),
            description: String::new(),
            status: Some(IssueStatus {
                id: 1,
                name: "Open".to_string(),
            }),
            created: None,
            updated: None,
        }
    }

    /// Create an issue with a description.
    pub fn issue_with_description(
        id: u64,
        key: &str,
        project_id: u64,
        summary: &str,
        description: &str,
    ) -> Issue {
        let mut issue = Self::minimal_issue(id, key, project_id, summary);
        issue.description = description.to_string();
        issue
    }

    // =========================================================================
    // Wiki Fixtures
    // =========================================================================

    /// Create a minimal wiki page with empty content.
    pub fn minimal_wiki(id: u64, project_id: u64, name: &str) -> Wiki {
        Wiki {
            id,
            project_id,
            name: name.to_string(),
            content: String::new(),
            created: None,
            updated: None,
        }
    }

    /// Create a wiki page with content.
    pub fn wiki_with_content(id: u64, project_id: u64, name: &str, content: &str) -> Wiki {
        let mut wiki = Self::minimal_wiki(id, project_id, name);
        wiki.content = content.to_string();
        wiki
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub projects: Vec<Project>,
    pub issues: Vec<Issue>,
    pub wikis: Vec<Wiki>,
}

impl DefaultScenario {
    fn new() -> Self {
        let projects = vec![
            Fixtures::markdown_project(1, "TEST", "Test Project"),
            // A project still on the legacy formatting rule; fetching it
            // through the client must fail validation.
            Fixtures::project_with_rule(2, "LEGACY", "Legacy Project", "backlog"),
        ];

        let issues = vec![
            Fixtures::issue_with_description(
                101,
                "TEST-1",
                1,
                "Set up the repository",
                "Create the initial project structure.",
            ),
            Fixtures::issue_with_description(
                102,
                "TEST-2",
                1,
                "Write the onboarding guide",
                "Document the local development workflow.",
            ),
            Fixtures::minimal_issue(103, "TEST-3", 1, "Triage incoming reports"),
        ];

        let wikis = vec![
            Fixtures::wiki_with_content(11, 1, "Home", "# Test Project\n\nWelcome."),
            Fixtures::wiki_with_content(12, 1, "Roadmap", "## Q3\n\n- pagination"),
        ];

        Self {
            projects,
            issues,
            wikis,
        }
    }
}
