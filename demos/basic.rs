//! Basic example demonstrating the Backlog API client.
//!
//! Run with:
//! ```
//! BACKLOG_API_KEY=your-key BACKLOG_HOST=example.backlog.jp \
//!     cargo run --example basic -- DEMO
//! ```

use backlogapi::{get_issues, get_wikis, BacklogClient, Get, Project};

#[tokio::main]
async fn main() -> backlogapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let project_key = std::env::args().nth(1).unwrap_or_else(|| "DEMO".to_string());

    // Create client from environment variables
    println!("Creating Backlog client...");
    let client = BacklogClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Fetch the project; this validates the markdown formatting rule
    println!("\n--- Getting Project ---");
    let project = Project::get(&client, project_key).await?;
    println!("Project: {} ({})", project.name, project.project_key);
    println!("  Id: {}", project.id);
    println!("  Formatting: {}", project.text_formatting_rule);

    // Walk every issue page of the project
    println!("\n--- Listing Issues ---");
    let issues = get_issues(&client, project.id).await?;
    println!("Found {} issues", issues.len());

    for issue in issues.iter().take(5) {
        let status = issue
            .status
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("unknown");
        let marker = if issue.has_description() { "*" } else { " " };
        println!("  {}{} [{}] {}", marker, issue.issue_key, status, issue.summary);
    }

    // Wikis come back in a single unpaginated response
    println!("\n--- Listing Wikis ---");
    let wikis = get_wikis(&client, &project.project_key).await?;
    println!("Found {} wikis", wikis.len());

    for wiki in wikis.iter().take(5) {
        println!("  {}. {}", wiki.id, wiki.name);
    }

    println!("\nDone!");
    Ok(())
}
