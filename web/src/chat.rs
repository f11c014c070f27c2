//! Browser presentation of the live-chat fallback.

use vanstra_core::chat::ChatTransport;
use vanstra_types::text;

/// Transport used when no real support widget is installed on the page.
///
/// Shows the informational prompt directing the user to the support
/// address. Deployments replace this with their own [`ChatTransport`] when
/// wiring a real-time widget.
pub struct AlertChat;

impl ChatTransport for AlertChat {
    fn open(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text::LIVE_CHAT_FALLBACK);
        }
    }
}
