//! Document-store publishing.
//!
//! Builds remote pages from a [`crate::ResultBundle`]: a notes page for
//! the artifact plus a child database of task rows.

pub mod blocks;
pub mod notion;

pub use notion::{clean_page_id, NotionPublisher};
