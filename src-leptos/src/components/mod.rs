//! Reusable UI components

mod blog_card;
mod footer;
mod select;

pub use blog_card::BlogCard;
pub use footer::Footer;
pub use select::Select;
