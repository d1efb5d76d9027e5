//! Blog post model.

use serde::{Deserialize, Serialize};

/// One blog entry as loaded from the document store.
///
/// The store owns these records; the frontend never mutates a Post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned document identifier
    pub id: String,
    /// Publication date as stored, expected but not guaranteed ISO-like
    pub date: String,
    /// Post title
    pub title: String,
    /// Full post body
    pub body: String,
}

impl Post {
    /// Create a new post with the given fields.
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), date: date.into(), title: title.into(), body: body.into() }
    }
}
