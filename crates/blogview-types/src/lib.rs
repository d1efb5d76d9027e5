//! # Blogview Types
//!
//! Domain models, wire types, and view-model logic for the Blogview frontend.
//!
//! - **`error`** - Typed errors for the document-store client
//! - **`models`** - Domain models (Post)
//! - **`store`** - Document-store wire format and decoding
//! - **`view`** - Pure filter/sort derivation for the blog list
//!
//! This crate sits below the Leptos frontend and carries no wasm
//! dependencies, so all list-derivation and decoding logic is testable
//! natively. All types are:
//!
//! - **Serializable** via serde for the store wire format
//! - **Clone** for cheap sharing across signal boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod store;
pub mod view;

// Re-export error types for convenience
pub use error::{Result, StoreError};

// Re-export core model types
pub use models::Post;

// Re-export view-model vocabulary
pub use view::{MalformedDates, SortOrder};
