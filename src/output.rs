//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Issue, Project, Wiki};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.project_key.len().max(30));

        let mut lines = vec![
            format!("Project: {}", self.project_key),
            divider,
            format!("Name:           {}", self.name),
            format!("Id:             {}", self.id),
            format!("Formatting:     {}", self.text_formatting_rule),
        ];

        if self.archived {
            lines.push("Archived:       yes".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Issue {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.issue_key.len().max(30));

        let mut lines = vec![
            format!("Issue: {}", self.issue_key),
            divider,
            format!("Summary:        {}", self.summary),
        ];

        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {}", status.name));
        }

        if let Some(ref updated) = self.updated {
            lines.push(format!(
                "Updated:        {}",
                updated.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if self.has_description() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Wiki {
    fn pretty_print(&self) -> String {
        let header = format!("Wiki #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref updated) = self.updated {
            lines.push(format!(
                "Updated:        {}",
                updated.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if !self.content.is_empty() {
            lines.push(String::new());
            lines.push(self.content.clone());
        }

        lines.join("\n")
    }
}
