//! Live-chat transport seam.
//!
//! The overlay routes "chat with support" interactions to a pluggable
//! transport. Deployments substitute a real support widget (Intercom, Drift,
//! Zendesk, in-house) without touching the controller; the default transport
//! is the informational fallback directing users to the support address.

use vanstra_types::text;

/// A pluggable live-chat transport.
///
/// `open` is fire-and-forget: the controller closes the overlay after
/// routing regardless of what the transport did, so implementations must
/// take over the interaction themselves (open a widget, navigate, etc.).
pub trait ChatTransport {
    /// Route a support-chat request to the transport.
    fn open(&mut self);
}

/// Default transport used when no real chat integration is installed.
///
/// Headless contexts only get the log line; the web binding wraps this with
/// a visible informational prompt carrying the same text.
#[derive(Debug, Default)]
pub struct FallbackChat;

impl ChatTransport for FallbackChat {
    fn open(&mut self) {
        tracing::info!(contact = text::SUPPORT_EMAIL, "live chat not configured, directing to email");
    }
}
