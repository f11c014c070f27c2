//! DOM-backed render surface.
//!
//! Implements [`RenderSurface`] over web-sys: the overlay backdrop and
//! content box are constructed element-by-element and all caller-supplied
//! strings are written with `set_text_content`, so nothing a caller passes
//! can ever become structural markup. Click routing is wired here with
//! explicit listener registration after construction; the markup itself
//! carries no handlers.
//!
//! Every operation degrades to a silent no-op when the document cannot
//! satisfy it, per the controller's surface contract.

use vanstra_core::style;
use vanstra_core::surface::{self, RenderSurface};
use vanstra_types::text;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, MouseEvent};

use crate::global;

/// Render surface backed by the page document.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Bind to the current page, or `None` in a context with no document
    /// (initialization then stays deferred until one is available).
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn element(&self, tag: &str, class: &str) -> Option<Element> {
        let el = self.document.create_element(tag).ok()?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Some(el)
    }

    fn text_element(&self, tag: &str, class: &str, content: &str) -> Option<Element> {
        let el = self.element(tag, class)?;
        el.set_text_content(Some(content));
        Some(el)
    }

    /// Register a persistent click listener on `el`.
    ///
    /// The closure lives for the rest of the page, matching the overlay's
    /// own lifetime, so leaking it via `forget` is the intended ownership.
    fn on_click(el: &Element, handler: impl FnMut(MouseEvent) + 'static) {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn build_contact_section(&self) -> Option<Element> {
        let section = self.element("div", "notification-contact-section")?;
        let title = self.text_element("div", "contact-title", text::CONTACT_TITLE)?;
        let methods = self.element("div", "contact-methods")?;

        let email = self.element("a", "contact-method")?;
        let _ = email.set_attribute("href", &format!("mailto:{}", text::SUPPORT_EMAIL));
        let email_label =
            self.text_element("span", "", &format!("Email: {}", text::SUPPORT_EMAIL))?;
        email.append_child(&email_label).ok()?;

        let chat = self.text_element("a", "contact-method", "Live Chat Support")?;
        let _ = chat.set_attribute("href", "#");
        Self::on_click(&chat, |ev| global::open_live_chat(Some(ev)));

        methods.append_child(&email).ok()?;
        methods.append_child(&chat).ok()?;
        section.append_child(&title).ok()?;
        section.append_child(&methods).ok()?;
        Some(section)
    }

    fn build_buttons(&self) -> Option<Element> {
        let row = self.element("div", "notification-buttons")?;

        let ok = self.text_element("button", "btn-close-notification", "OK")?;
        Self::on_click(&ok, |_| global::close_notification(None));

        let chat = self.text_element("button", "btn-contact", "Chat with Support")?;
        Self::on_click(&chat, |ev| global::open_live_chat(Some(ev)));

        row.append_child(&ok).ok()?;
        row.append_child(&chat).ok()?;
        Some(row)
    }

    fn build_overlay(&self, title: &str, message: &str) -> Option<Element> {
        let backdrop = self.element("div", style::OVERLAY_CLASS)?;
        backdrop.set_id(surface::OVERLAY_ID);
        Self::on_click(&backdrop, |ev| global::close_notification(Some(ev)));

        let content = self.element("div", style::BOX_CLASS)?;

        let header = self.element("div", "notification-header")?;
        let title_span = self.text_element("span", "", title)?;
        title_span.set_id(surface::TITLE_ID);
        header.append_child(&title_span).ok()?;

        let msg = self.text_element("div", "notification-message", message)?;
        msg.set_id(surface::MESSAGE_ID);

        content.append_child(&header).ok()?;
        content.append_child(&msg).ok()?;
        content.append_child(&self.build_contact_section()?).ok()?;
        content.append_child(&self.build_buttons()?).ok()?;
        backdrop.append_child(&content).ok()?;
        Some(backdrop)
    }

    fn set_text(&self, id: &str, content: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(content));
        }
    }
}

impl RenderSurface for DomSurface {
    fn overlay_exists(&self) -> bool {
        self.document.get_element_by_id(surface::OVERLAY_ID).is_some()
    }

    fn mount_overlay(&mut self, title: &str, message: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Some(backdrop) = self.build_overlay(title, message) {
            let _ = body.append_child(&backdrop);
        }
    }

    fn style_registered(&self) -> bool {
        self.document.get_element_by_id(surface::STYLE_ID).is_some()
    }

    fn register_style(&mut self, css: &str) {
        let Ok(el) = self.document.create_element("style") else {
            return;
        };
        el.set_id(surface::STYLE_ID);
        el.set_text_content(Some(css));
        if let Some(head) = self.document.head() {
            let _ = head.append_child(&el);
        }
    }

    fn set_title(&mut self, content: &str) {
        self.set_text(surface::TITLE_ID, content);
    }

    fn set_message(&mut self, content: &str) {
        self.set_text(surface::MESSAGE_ID, content);
    }

    fn set_active(&mut self, active: bool) {
        let Some(el) = self.document.get_element_by_id(surface::OVERLAY_ID) else {
            return;
        };
        let class_list = el.class_list();
        let _ = if active {
            class_list.add_1(style::ACTIVE_CLASS)
        } else {
            class_list.remove_1(style::ACTIVE_CLASS)
        };
    }
}

/// Whether a click event's original target was the overlay backdrop itself
/// (as opposed to a descendant inside the content box).
pub fn target_is_backdrop(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| el.id() == surface::OVERLAY_ID)
        .unwrap_or(false)
}
