//! Document-store wire format.
//!
//! The store exposes collections of schema-less documents over a REST API.
//! Listing a collection returns each document's resource name plus a map of
//! typed field values; only string fields are meaningful to this frontend,
//! other value kinds are ignored.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::Post;

/// Response to a list-documents request on a collection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListDocumentsResponse {
    /// Documents in the collection; absent when the collection is empty.
    #[serde(default)]
    pub documents: Vec<StoreDocument>,
}

/// One document as returned by the store.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreDocument {
    /// Full resource name, e.g. `projects/p/databases/(default)/documents/blogs/abc123`.
    pub name: String,
    /// Field map; a document may legitimately omit fields.
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

/// A typed field value. Non-string kinds are decoded but unused.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub integer_value: Option<String>,
    #[serde(default)]
    pub timestamp_value: Option<String>,
}

impl StoreDocument {
    /// Store-assigned identifier: the last segment of the resource name.
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn string_field(&self, key: &str) -> String {
        self.fields
            .get(key)
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default()
    }

    /// Convert into a domain Post.
    ///
    /// Missing fields decode to empty strings rather than failing, so one
    /// malformed document never aborts rendering of the rest of the list.
    pub fn into_post(self) -> Post {
        Post {
            id: self.doc_id().to_string(),
            date: self.string_field("date"),
            title: self.string_field("title"),
            body: self.string_field("body"),
        }
    }
}

impl ListDocumentsResponse {
    /// Decode every document in the response into a Post, in store order.
    pub fn into_posts(self) -> Vec<Post> {
        self.documents.into_iter().map(StoreDocument::into_post).collect()
    }
}
