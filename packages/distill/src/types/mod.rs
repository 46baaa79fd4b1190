//! Data types for the distillation pipeline.

pub mod bundle;
pub mod insights;
pub mod summary;
pub mod task;
