//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::BacklogClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier (a key string or numeric id).
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, Issue, Get};
///
/// let client = BacklogClient::from_env()?;
/// let issue = Issue::get(&client, "DEMO-42".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity (e.g., a key string or numeric id).
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Backlog API client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &BacklogClient, id: Self::Id) -> Result<Self>;
}
