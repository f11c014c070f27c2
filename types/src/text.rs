//! Fixed display text for the notification overlay.
//!
//! All user-facing copy lives here so the overlay controller and the web
//! binding render identical strings. Callers pass these through text-content
//! assignment only; nothing in this module is ever interpreted as markup.

/// Title shown when a caller passes an empty title.
pub const DEFAULT_TITLE: &str = "Notification";

/// Message shown when a caller passes an empty message.
pub const DEFAULT_MESSAGE: &str = "Your action has been completed successfully.";

/// Out-of-band support contact address.
pub const SUPPORT_EMAIL: &str = "support@vanstra.bank";

/// Heading for the contact section inside the overlay box.
pub const CONTACT_TITLE: &str = "Need Help? Contact Us";

/// Fixed title for coming-soon notifications, independent of the feature name.
pub const COMING_SOON_TITLE: &str = "Feature Coming Soon";

/// Informational fallback shown when no live-chat transport is installed.
pub const LIVE_CHAT_FALLBACK: &str = "Live chat support will be available soon. \
    Please email support@vanstra.bank for immediate assistance.";

/// Build the coming-soon message for a feature.
///
/// The feature name is embedded verbatim as plain text; it is the caller's
/// display string, not markup.
pub fn coming_soon_message(feature: &str) -> String {
    format!(
        "{feature} is currently under development. Our team is working hard \
         to bring this feature to you. Please contact support for updates or \
         assistance."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coming_soon_embeds_feature_verbatim() {
        let msg = coming_soon_message("Transfers");
        assert!(msg.contains("Transfers"));
        assert!(msg.starts_with("Transfers is currently under development"));
    }

    #[test]
    fn test_coming_soon_keeps_markup_literal() {
        let msg = coming_soon_message("<b>Loans</b>");
        assert!(msg.contains("<b>Loans</b>"));
    }

    #[test]
    fn test_fallback_names_support_address() {
        assert!(LIVE_CHAT_FALLBACK.contains(SUPPORT_EMAIL));
    }
}
