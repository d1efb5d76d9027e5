//! Page components

mod blog;

pub use blog::Blog;
