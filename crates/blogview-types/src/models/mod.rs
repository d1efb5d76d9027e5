//! Domain models for Blogview.

mod post;

pub use post::Post;
