//! Render-tree seam for the notification overlay.
//!
//! The controller never touches a document directly; it drives an
//! implementation of [`RenderSurface`]. The web binding provides the real
//! DOM-backed surface, and tests provide an in-memory one. Both honor the
//! same contract: existence checks by reserved identifier, structural mount,
//! style registration, and text-content assignment.

/// Reserved identifier for the overlay surface (backdrop element).
pub const OVERLAY_ID: &str = "notificationOverlay";

/// Reserved identifier for the title text node inside the content box.
pub const TITLE_ID: &str = "notificationTitle";

/// Reserved identifier for the message text node inside the content box.
pub const MESSAGE_ID: &str = "notificationMessage";

/// Reserved identifier for the shared style fragment.
pub const STYLE_ID: &str = "vanstra-notification-styles";

/// The render-tree operations the overlay controller needs.
///
/// Every method degrades to a silent no-op when the underlying tree cannot
/// satisfy it; the controller never sees an error from its surface. Text
/// setters MUST assign plain text content. Caller-supplied strings are never
/// interpreted as markup, which is what makes the overlay injection-safe.
pub trait RenderSurface {
    /// Whether the overlay surface (keyed by [`OVERLAY_ID`]) is attached.
    fn overlay_exists(&self) -> bool;

    /// Construct and attach the overlay surface with the given placeholder
    /// title and message. Called at most once per page lifetime; callers
    /// check [`overlay_exists`](Self::overlay_exists) first.
    fn mount_overlay(&mut self, title: &str, message: &str);

    /// Whether the shared style fragment (keyed by [`STYLE_ID`]) is attached.
    fn style_registered(&self) -> bool;

    /// Attach the shared style fragment. Called at most once per page
    /// lifetime; callers check [`style_registered`](Self::style_registered)
    /// first.
    fn register_style(&mut self, css: &str);

    /// Replace the title text. Plain text assignment only.
    fn set_title(&mut self, text: &str);

    /// Replace the message text. Plain text assignment only.
    fn set_message(&mut self, text: &str);

    /// Toggle the active (visible) display state of the surface.
    fn set_active(&mut self, active: bool);
}
