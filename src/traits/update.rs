//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::BacklogClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified after
/// creation. Updates are partial: unset params leave the remote field
/// untouched.
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, Issue, Update, IssueUpdateParams};
///
/// let client = BacklogClient::from_env()?;
/// let updated = Issue::update(
///     &client,
///     "DEMO-42".to_string(),
///     IssueUpdateParams {
///         description: Some("Reworded description".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Arguments
    ///
    /// * `client` - The Backlog API client
    /// * `id` - The entity identifier
    /// * `params` - Update parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &BacklogClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
