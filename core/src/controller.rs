//! Overlay lifecycle controller.
//!
//! Owns the single notification overlay for the lifetime of the page:
//! lazily mounts the surface and the shared style fragment (exactly once,
//! no matter how many call sites race to initialize), and mediates every
//! transition between hidden and visible.
//!
//! All operations are infallible by design. A missing surface or a
//! disqualified close request is a silent no-op, never an error surfaced to
//! the caller; a notification affordance that asserts on environment
//! readiness is worse than one that quietly does nothing.

use crate::chat::{ChatTransport, FallbackChat};
use crate::style;
use crate::surface::RenderSurface;
use vanstra_types::text;

/// Where a close request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOrigin {
    /// Programmatic close: the OK button, or cleanup after routing to chat.
    Unconditional,

    /// A pointer interaction. Only clicks that landed on the backdrop
    /// itself dismiss the overlay; clicks bubbling up from the content box
    /// are ignored.
    Click {
        /// Whether the original event target was the backdrop element.
        on_backdrop: bool,
    },
}

/// Singleton overlay state.
///
/// `initialized` becomes `true` exactly once per page lifetime and never
/// reverts; `visible` is `true` only while the surface is attached in its
/// active display state.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    pub initialized: bool,
    pub visible: bool,
    pub title: String,
    pub message: String,
}

/// The overlay controller.
///
/// Generic over the render surface so the same state machine runs against
/// the DOM in the web binding and against an in-memory surface in tests.
pub struct OverlayController<S: RenderSurface> {
    surface: S,
    chat: Box<dyn ChatTransport>,
    state: OverlayState,
}

impl<S: RenderSurface> OverlayController<S> {
    /// Create a controller with the default informational chat fallback.
    pub fn new(surface: S) -> Self {
        Self::with_chat(surface, Box::new(FallbackChat))
    }

    /// Create a controller routing live-chat requests to `chat`.
    pub fn with_chat(surface: S, chat: Box<dyn ChatTransport>) -> Self {
        Self {
            surface,
            chat,
            state: OverlayState::default(),
        }
    }

    /// Current overlay state, for inspection.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Mount the overlay surface and style fragment if they do not exist yet.
    ///
    /// Idempotent: safe to call any number of times, from any entry point.
    /// After it returns, exactly one surface and one style registration
    /// exist regardless of prior call history.
    pub fn ensure_initialized(&mut self) {
        if self.state.initialized {
            return;
        }

        if self.surface.overlay_exists() {
            // Another inclusion of the module already mounted the surface.
            self.state.initialized = true;
            return;
        }

        tracing::debug!("mounting notification overlay");
        self.surface
            .mount_overlay(text::DEFAULT_TITLE, text::DEFAULT_MESSAGE);
        self.state.title = text::DEFAULT_TITLE.to_string();
        self.state.message = text::DEFAULT_MESSAGE.to_string();

        if !self.surface.style_registered() {
            self.surface.register_style(style::STYLE_FRAGMENT);
        }

        self.state.initialized = true;
    }

    /// Show the overlay with the given title and message.
    ///
    /// Initializes on demand, replaces any previously shown content, and
    /// transitions to visible. Empty strings fall back to the fixed
    /// defaults. Both strings are assigned as plain text content, never
    /// interpreted as markup.
    pub fn show(&mut self, title: &str, message: &str) {
        self.ensure_initialized();

        let title = if title.is_empty() {
            text::DEFAULT_TITLE
        } else {
            title
        };
        let message = if message.is_empty() {
            text::DEFAULT_MESSAGE
        } else {
            message
        };

        self.surface.set_title(title);
        self.surface.set_message(message);
        self.surface.set_active(true);

        self.state.title = title.to_string();
        self.state.message = message.to_string();
        self.state.visible = true;
        tracing::debug!(title, "notification shown");
    }

    /// Hide the overlay.
    ///
    /// A click-originated close proceeds only when the click landed on the
    /// backdrop itself; anything else is an ignored click. Closing a
    /// never-initialized or already-hidden overlay is a no-op.
    pub fn close(&mut self, origin: CloseOrigin) {
        if let CloseOrigin::Click { on_backdrop: false } = origin {
            return;
        }
        if !self.surface.overlay_exists() {
            return;
        }

        self.surface.set_active(false);
        if self.state.visible {
            self.state.visible = false;
            tracing::debug!("notification closed");
        }
    }

    /// Show the fixed coming-soon notification for a feature.
    ///
    /// The title is constant; the feature name is embedded verbatim in the
    /// message as plain text.
    pub fn show_coming_soon(&mut self, feature: &str) {
        self.show(text::COMING_SOON_TITLE, &text::coming_soon_message(feature));
    }

    /// Route a support-chat request to the configured transport, then close.
    ///
    /// The controller only routes; the transport owns the interaction from
    /// there. With no real transport installed, the fallback directs the
    /// user to the support address.
    pub fn open_live_chat(&mut self) {
        tracing::debug!("routing live chat request");
        self.chat.open();
        self.close(CloseOrigin::Unconditional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory render surface tracking mount/registration counts.
    #[derive(Debug, Default)]
    struct FakeSurface {
        mount_count: u32,
        style_count: u32,
        mounted: bool,
        styled: bool,
        title: String,
        message: String,
        active: bool,
    }

    impl RenderSurface for FakeSurface {
        fn overlay_exists(&self) -> bool {
            self.mounted
        }

        fn mount_overlay(&mut self, title: &str, message: &str) {
            self.mount_count += 1;
            self.mounted = true;
            self.title = title.to_string();
            self.message = message.to_string();
        }

        fn style_registered(&self) -> bool {
            self.styled
        }

        fn register_style(&mut self, _css: &str) {
            self.style_count += 1;
            self.styled = true;
        }

        fn set_title(&mut self, text: &str) {
            self.title = text.to_string();
        }

        fn set_message(&mut self, text: &str) {
            self.message = text.to_string();
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    /// Chat transport that counts how often it was opened.
    struct CountingChat {
        opened: Rc<Cell<u32>>,
    }

    impl ChatTransport for CountingChat {
        fn open(&mut self) {
            self.opened.set(self.opened.get() + 1);
        }
    }

    fn make_controller() -> OverlayController<FakeSurface> {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        OverlayController::new(FakeSurface::default())
    }

    #[test]
    fn test_ensure_initialized_idempotent() {
        let mut ctrl = make_controller();
        for _ in 0..5 {
            ctrl.ensure_initialized();
        }
        assert_eq!(ctrl.surface.mount_count, 1);
        assert_eq!(ctrl.surface.style_count, 1);
        assert!(ctrl.state().initialized);
        assert!(!ctrl.state().visible);
    }

    #[test]
    fn test_existing_surface_skips_mount() {
        // Simulates a second inclusion of the module on the same page.
        let surface = FakeSurface {
            mounted: true,
            styled: true,
            ..Default::default()
        };
        let mut ctrl = OverlayController::new(surface);
        ctrl.ensure_initialized();
        assert_eq!(ctrl.surface.mount_count, 0);
        assert_eq!(ctrl.surface.style_count, 0);
        assert!(ctrl.state().initialized);
    }

    #[test]
    fn test_mount_uses_placeholder_content() {
        let mut ctrl = make_controller();
        ctrl.ensure_initialized();
        assert_eq!(ctrl.surface.title, "Notification");
        assert_eq!(
            ctrl.surface.message,
            "Your action has been completed successfully."
        );
        assert!(!ctrl.surface.active);
    }

    #[test]
    fn test_show_sets_content_and_visibility() {
        let mut ctrl = make_controller();
        ctrl.show("Transfer Complete", "Your funds have been moved.");
        assert!(ctrl.state().visible);
        assert_eq!(ctrl.surface.title, "Transfer Complete");
        assert_eq!(ctrl.surface.message, "Your funds have been moved.");
        assert!(ctrl.surface.active);
        // show() self-initializes
        assert_eq!(ctrl.surface.mount_count, 1);
        assert_eq!(ctrl.surface.style_count, 1);
    }

    #[test]
    fn test_second_show_overwrites_first() {
        let mut ctrl = make_controller();
        ctrl.show("Title A", "Msg A");
        ctrl.show("Title B", "Msg B");
        assert!(ctrl.state().visible);
        assert_eq!(ctrl.surface.title, "Title B");
        assert_eq!(ctrl.surface.message, "Msg B");
        // Still exactly one surface and one style registration.
        assert_eq!(ctrl.surface.mount_count, 1);
        assert_eq!(ctrl.surface.style_count, 1);
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let mut ctrl = make_controller();
        ctrl.show("", "");
        assert_eq!(ctrl.surface.title, "Notification");
        assert_eq!(
            ctrl.surface.message,
            "Your action has been completed successfully."
        );
        assert!(ctrl.state().visible);
    }

    #[test]
    fn test_close_before_init_is_noop() {
        let mut ctrl = make_controller();
        ctrl.close(CloseOrigin::Unconditional);
        assert!(!ctrl.state().initialized);
        assert!(!ctrl.state().visible);
        assert_eq!(ctrl.surface.mount_count, 0);
        assert_eq!(ctrl.surface.style_count, 0);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut ctrl = make_controller();
        ctrl.show("Title", "Msg");
        ctrl.close(CloseOrigin::Click { on_backdrop: true });
        assert!(!ctrl.state().visible);
        assert!(!ctrl.surface.active);
    }

    #[test]
    fn test_inner_click_is_ignored() {
        let mut ctrl = make_controller();
        ctrl.show("Title", "Msg");
        ctrl.close(CloseOrigin::Click { on_backdrop: false });
        assert!(ctrl.state().visible);
        assert!(ctrl.surface.active);
    }

    #[test]
    fn test_close_when_already_hidden_is_noop() {
        let mut ctrl = make_controller();
        ctrl.ensure_initialized();
        ctrl.close(CloseOrigin::Unconditional);
        assert!(!ctrl.state().visible);
        assert!(ctrl.state().initialized);
    }

    #[test]
    fn test_reshow_after_close() {
        let mut ctrl = make_controller();
        ctrl.show("First", "One");
        ctrl.close(CloseOrigin::Unconditional);
        assert!(!ctrl.state().visible);
        ctrl.show("Second", "Two");
        assert!(ctrl.state().visible);
        assert_eq!(ctrl.surface.title, "Second");
        assert_eq!(ctrl.surface.message, "Two");
        assert_eq!(ctrl.surface.mount_count, 1);
    }

    #[test]
    fn test_initialized_never_reverts() {
        let mut ctrl = make_controller();
        ctrl.show("Title", "Msg");
        ctrl.close(CloseOrigin::Unconditional);
        assert!(ctrl.state().initialized);
        ctrl.close(CloseOrigin::Unconditional);
        assert!(ctrl.state().initialized);
    }

    #[test]
    fn test_coming_soon_fixed_title_and_feature_substring() {
        let mut ctrl = make_controller();
        ctrl.show_coming_soon("Transfers");
        assert_eq!(ctrl.surface.title, "Feature Coming Soon");
        assert!(ctrl.surface.message.contains("Transfers"));

        ctrl.show_coming_soon("Loans");
        // Title is constant regardless of the feature name.
        assert_eq!(ctrl.surface.title, "Feature Coming Soon");
        assert!(ctrl.surface.message.contains("Loans"));
    }

    #[test]
    fn test_caller_markup_stays_literal_text() {
        let mut ctrl = make_controller();
        ctrl.show("<img src=x>", "<b>hi</b>");
        // The surface receives the raw strings for text-content assignment;
        // angle brackets survive as literal characters.
        assert_eq!(ctrl.surface.title, "<img src=x>");
        assert_eq!(ctrl.surface.message, "<b>hi</b>");
        assert!(ctrl.surface.title.contains('<'));
        assert!(ctrl.surface.message.contains('<'));
    }

    #[test]
    fn test_open_live_chat_routes_then_closes() {
        let opened = Rc::new(Cell::new(0));
        let chat = CountingChat {
            opened: Rc::clone(&opened),
        };
        let mut ctrl = OverlayController::with_chat(FakeSurface::default(), Box::new(chat));
        ctrl.show("Title", "Msg");
        ctrl.open_live_chat();
        assert_eq!(opened.get(), 1);
        assert!(!ctrl.state().visible);
        assert!(!ctrl.surface.active);
    }

    #[test]
    fn test_open_live_chat_before_init_does_not_panic() {
        let opened = Rc::new(Cell::new(0));
        let chat = CountingChat {
            opened: Rc::clone(&opened),
        };
        let mut ctrl = OverlayController::with_chat(FakeSurface::default(), Box::new(chat));
        ctrl.open_live_chat();
        assert_eq!(opened.get(), 1);
        assert!(!ctrl.state().visible);
    }
}
