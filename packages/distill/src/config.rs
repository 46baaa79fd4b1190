//! Explicit configuration for credentials and the document store.
//!
//! Configuration is read once into a [`Config`] value and passed into the
//! selector and orchestrator at construction time. Picking up live
//! credential changes is an explicit [`Config::reload`], not a side effect
//! of every read.
//!
//! API keys are held as [`SecretString`] so they never leak through `Debug`
//! or `Display` output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// Environment key for the user's own secondary-backend (OpenRouter) key.
pub const ENV_SECONDARY_KEY: &str = "AI_SECONDARY_KEY";
/// Environment key for the primary-backend (Gemini) key.
pub const ENV_PRIMARY_KEY: &str = "AI_PRIMARY_KEY";
/// Environment key for the document-store integration token.
pub const ENV_DOCSTORE_TOKEN: &str = "DOCSTORE_TOKEN";
/// Environment key for the parent page the publisher writes under.
pub const ENV_DOCSTORE_PARENT_ID: &str = "DOCSTORE_PARENT_ID";

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use in an outbound request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Source of deployment-provisioned secrets (hosted environments).
///
/// The shared secondary-backend key lives here in hosted deployments. Its
/// value never leaves the process; callers outside the selector only get
/// the boolean existence probe on [`Config`].
pub trait SecretsProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<SecretString>;
}

/// A provider with no secrets (local runs without a deployment layer).
pub struct NoSecrets;

impl SecretsProvider for NoSecrets {
    fn get(&self, _key: &str) -> Option<SecretString> {
        None
    }
}

/// Process configuration, consolidated from the environment and an
/// optional deployment secrets provider.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// User-supplied secondary-backend key (local configuration).
    pub secondary_key: Option<SecretString>,

    /// Pre-provisioned shared secondary-backend key (deployment only).
    pub shared_secondary_key: Option<SecretString>,

    /// Primary-backend key, from local or deployment configuration.
    pub primary_key: Option<SecretString>,

    /// Document-store integration token.
    pub docstore_token: Option<SecretString>,

    /// Parent page identifier new pages are created under.
    pub docstore_parent_id: Option<String>,
}

impl Config {
    /// Read configuration from the process environment only.
    ///
    /// The driver is expected to have called `dotenvy::dotenv()` first.
    pub fn from_env() -> Self {
        Self::load(&NoSecrets)
    }

    /// Read configuration from the environment plus a deployment provider.
    pub fn load(deployment: &dyn SecretsProvider) -> Self {
        let env_secret = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(SecretString::new)
        };

        Self {
            secondary_key: env_secret(ENV_SECONDARY_KEY),
            shared_secondary_key: deployment.get(ENV_SECONDARY_KEY),
            primary_key: env_secret(ENV_PRIMARY_KEY).or_else(|| deployment.get(ENV_PRIMARY_KEY)),
            docstore_token: env_secret(ENV_DOCSTORE_TOKEN),
            docstore_parent_id: std::env::var(ENV_DOCSTORE_PARENT_ID)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Re-read configuration so credential changes take effect without a
    /// process restart.
    pub fn reload(&mut self, deployment: &dyn SecretsProvider) {
        *self = Self::load(deployment);
    }

    /// Existence probe: is any AI credential available?
    ///
    /// Degrades to a boolean, never errors and never exposes a value.
    pub fn has_ai_credential(&self) -> bool {
        self.secondary_key.is_some()
            || self.shared_secondary_key.is_some()
            || self.primary_key.is_some()
    }

    /// Existence probe for the deployment-provisioned shared key.
    pub fn has_shared_secondary(&self) -> bool {
        self.shared_secondary_key.is_some()
    }

    /// Existence probe: can the publisher run?
    pub fn has_docstore(&self) -> bool {
        self.docstore_token.is_some() && self.docstore_parent_id.is_some()
    }
}
