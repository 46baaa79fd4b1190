//! Document-publishing sink boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::bundle::ResultBundle;

/// The external document store that turns a bundle into persisted pages.
///
/// Implementations create a parent page for the bundle's artifact plus an
/// optional child database of task rows. Failures surface as
/// [`crate::DistillError::Publish`] with the remote service's message; the
/// bundle itself stays intact in the caller's hands for a manual retry.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a bundle under `parent`, returning the created page id.
    async fn publish(&self, bundle: &ResultBundle, parent: &str) -> Result<String>;
}
