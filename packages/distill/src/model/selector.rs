//! Backend selection by credential precedence.
//!
//! Priority order, first match wins:
//!   1. User's own secondary-backend key from local configuration
//!      (they entered it themselves).
//!   2. Shared secondary-backend key from deployment configuration
//!      (pre-provided; value never leaves the process).
//!   3. Primary-backend key from local or deployment configuration.
//!
//! Each call re-resolves from the passed config, so credential changes
//! take effect on the next request without a restart. Nothing is cached.

use tracing::debug;

use crate::config::Config;
use crate::error::{DistillError, Result};
use crate::model::{Gemini, OpenRouter};
use crate::traits::model::StructuredModel;

/// Resolve the backend to use for one extraction run.
///
/// Fails with [`DistillError::Config`] when no credential resolves:
/// fatal to the extraction that needed it, no silent fallback beyond the
/// documented precedence.
pub fn resolve(config: &Config) -> Result<Box<dyn StructuredModel>> {
    if let Some(key) = &config.secondary_key {
        let backend = OpenRouter::new(key.clone());
        debug!(backend = backend.id(), source = "local", "resolved model backend");
        return Ok(Box::new(backend));
    }

    if let Some(key) = &config.shared_secondary_key {
        let backend = OpenRouter::new(key.clone());
        debug!(backend = backend.id(), source = "deployment", "resolved model backend");
        return Ok(Box::new(backend));
    }

    if let Some(key) = &config.primary_key {
        let backend = Gemini::new(key.clone());
        debug!(backend = backend.id(), source = "primary", "resolved model backend");
        return Ok(Box::new(backend));
    }

    Err(DistillError::Config(
        "no AI credential available".to_string(),
    ))
}
