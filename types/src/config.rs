//! Backend credential configuration.
//!
//! The hosting page exposes a single global configuration slot holding the
//! backend endpoint URL and the public anon key. The slot is read once at
//! module start by the bootstrap and handed to the backend client if one is
//! installed. This is configuration data only; it carries no logic beyond
//! shape validation.
//!
//! The anon key is a public key by design. Service-role keys must never be
//! placed in this slot.

use serde::{Deserialize, Serialize};

/// Backend endpoint credentials, as published by the hosting page.
///
/// The on-page shape uses `url` / `key` field names, kept here via serde
/// renames so existing deployments keep working unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend project endpoint, e.g. `https://example.supabase.co`
    #[serde(default)]
    pub url: String,

    /// Public anon key for the project
    #[serde(default, rename = "key")]
    pub anon_key: String,
}

impl BackendConfig {
    /// Whether both fields are present and plausible enough to hand to a
    /// backend client. An empty slot is normal (the page opted out), so
    /// callers treat `false` as "skip initialization", not as an error.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty() && self.url.starts_with("https://")
    }
}
