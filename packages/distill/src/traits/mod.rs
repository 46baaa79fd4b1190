//! Trait abstractions at the pipeline's external boundaries.
//!
//! Applications implement these to provide model backends, transcript
//! acquisition, and document publishing.

pub mod model;
pub mod publisher;
pub mod transcript;
