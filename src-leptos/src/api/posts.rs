//! Blog post reads

use blogview_types::store::ListDocumentsResponse;
use blogview_types::{Post, StoreError};

use super::fetch_json;

/// Read-only client for the document store, handed to pages through Leptos
/// context rather than a process-wide global.
#[derive(Clone)]
pub struct StoreClient {
    base_url: String,
}

impl StoreClient {
    /// Client rooted at the given store base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// List every document in `collection` as domain posts, in store order.
    pub async fn list_posts(&self, collection: &str) -> Result<Vec<Post>, StoreError> {
        let url = format!("{}/documents/{}", self.base_url, collection);
        let response: ListDocumentsResponse = fetch_json(&url).await?;
        Ok(response.into_posts())
    }
}
