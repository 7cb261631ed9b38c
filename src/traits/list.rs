//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::BacklogClient;
use crate::error::Result;
use crate::pagination::Page;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List/filter entities with offset pagination support.
///
/// Implement this trait for entity types whose list endpoint honors the
/// `offset`/`count` window parameters.
///
/// # Example
///
/// ```ignore
/// use backlogapi::{BacklogClient, Issue, List};
///
/// let client = BacklogClient::from_env()?;
///
/// // Fetch a single page
/// let page = Issue::list_page(&client, &Default::default(), 0, 50).await?;
///
/// // Fetch all pages
/// let all_issues = Issue::list_all(&client, &Default::default()).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Default + Send + Sync;

    /// List entities matching the query (single page).
    ///
    /// # Arguments
    ///
    /// * `client` - The Backlog API client
    /// * `query` - Query parameters for filtering
    /// * `offset` - Offset of the first item to return
    /// * `count` - Number of items per page (max 100)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page(
        client: &BacklogClient,
        query: &Self::Query,
        offset: u64,
        count: u32,
    ) -> Result<Page<Self>>;

    /// List all entities matching the query (fetches all pages).
    ///
    /// Pages are requested sequentially with `count = 100`, advancing the
    /// offset by 100 between requests. A page shorter than the requested
    /// count (including an empty one) is the last page; no further request
    /// is issued after it. The result is the in-order concatenation of all
    /// pages.
    ///
    /// # Arguments
    ///
    /// * `client` - The Backlog API client
    /// * `query` - Query parameters for filtering
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &BacklogClient, query: &Self::Query) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut offset = 0u64;
        let mut pages = 0u32;

        loop {
            let page = Self::list_page(client, query, offset, DEFAULT_PAGE_SIZE).await?;
            let fetched = page.items.len();
            all_items.extend(page.items);

            if fetched < DEFAULT_PAGE_SIZE as usize {
                break;
            }
            offset += u64::from(DEFAULT_PAGE_SIZE);
            pages += 1;

            // Safety limit to prevent infinite loops
            if pages >= MAX_PAGES {
                tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
                break;
            }
        }

        Ok(all_items)
    }
}
