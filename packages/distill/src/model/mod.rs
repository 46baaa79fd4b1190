//! Model backends and credential-driven selection.

pub mod gemini;
pub mod openrouter;
pub mod selector;

pub use gemini::Gemini;
pub use openrouter::OpenRouter;
pub use selector::resolve;
