//! Language-model backend abstraction.

use async_trait::async_trait;

use crate::error::Result;

/// A backend capable of returning schema-conforming structured output
/// from a prompt.
///
/// Implementations wrap specific providers (OpenRouter, Gemini) and hide
/// the provider's request shape; nothing provider-specific is exposed
/// upward. One call is one network round trip, invoked at the provider's
/// most deterministic temperature setting. Repeated calls on identical
/// input are expected to be stable but not guaranteed identical, an
/// external-model property, not a code contract.
#[async_trait]
pub trait StructuredModel: Send + Sync {
    /// Generate a reply conforming to `schema` (a JSON Schema document).
    ///
    /// Returns the raw reply text; callers parse it into the target type.
    /// No retry on transient failure; the caller surfaces the error.
    async fn generate_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String>;

    /// Identifier for logs, e.g. `"openrouter/openai/gpt-4o-mini"`.
    fn id(&self) -> &str;
}
