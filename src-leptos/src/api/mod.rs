//! Document-store HTTP bindings.
//!
//! Thin read-only client for the hosted document store's REST API. This
//! frontend consumes exactly one operation: list all documents in a
//! collection. All filtering and sorting happens client-side afterwards.

mod posts;

pub use posts::StoreClient;

use blogview_types::StoreError;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Base URL of the hosted database this site reads from.
pub const DEFAULT_STORE_BASE: &str =
    "https://firestore.googleapis.com/v1/projects/blogview-site/databases/(default)";

/// Collection holding the blog posts.
pub const BLOGS_COLLECTION: &str = "blogs";

/// Make a GET request and decode the JSON response.
async fn fetch_json<R: DeserializeOwned>(url: &str) -> Result<R, StoreError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| StoreError::Network(format!("Failed to create request: {e:?}")))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| StoreError::Network(format!("Failed to set headers: {e:?}")))?;

    let window = web_sys::window().ok_or_else(|| StoreError::Network("No window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| StoreError::Network(format!("Fetch failed: {e:?}")))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| StoreError::Decode("Response is not a Response".to_string()))?;

    if !resp.ok() {
        return Err(StoreError::Http { status: resp.status() });
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| StoreError::Decode(format!("JSON parse failed: {e:?}")))?,
    )
    .await
    .map_err(|e| StoreError::Decode(format!("JSON future failed: {e:?}")))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| StoreError::Decode(e.to_string()))
}
