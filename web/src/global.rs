//! Global activation API and module lifecycle.
//!
//! The controller lives in a module-scoped singleton; the exported
//! functions are thin forwarders that initialize it on demand, so every
//! entry point tolerates being called before first initialization and
//! tolerates redundant replay. The exported names match the page-facing
//! API so existing inline handlers keep working.

use std::cell::RefCell;

use vanstra_core::{CloseOrigin, OverlayController};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, MouseEvent};

use crate::bootstrap;
use crate::chat::AlertChat;
use crate::dom::{self, DomSurface};

thread_local! {
    static CONTROLLER: RefCell<Option<OverlayController<DomSurface>>> = const { RefCell::new(None) };
}

/// Run `f` against the singleton controller, creating it on first use.
///
/// A context with no document gets no controller; the call is then the
/// deferred no-op the surface contract promises.
fn with_controller(f: impl FnOnce(&mut OverlayController<DomSurface>)) {
    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let Some(surface) = DomSurface::new() else {
                return;
            };
            *slot = Some(OverlayController::with_chat(surface, Box::new(AlertChat)));
        }
        if let Some(controller) = slot.as_mut() {
            f(controller);
        }
    });
}

/// Show the notification overlay with a title and message.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(title: String, message: String) {
    with_controller(|c| c.show(&title, &message));
}

/// Close the notification overlay.
///
/// When called with a click event, the close only proceeds if the click
/// landed on the backdrop itself; clicks inside the content box are
/// ignored. Without an event the close is unconditional.
#[wasm_bindgen(js_name = closeNotification)]
pub fn close_notification(event: Option<MouseEvent>) {
    let origin = match &event {
        Some(ev) => CloseOrigin::Click {
            on_backdrop: dom::target_is_backdrop(ev),
        },
        None => CloseOrigin::Unconditional,
    };
    with_controller(|c| c.close(origin));
}

/// Show the fixed coming-soon notification for a feature.
#[wasm_bindgen(js_name = showComingSoon)]
pub fn show_coming_soon(feature: String) {
    with_controller(|c| c.show_coming_soon(&feature));
}

/// Route a support-chat request to the configured transport.
#[wasm_bindgen(js_name = openLiveChat)]
pub fn open_live_chat(event: Option<MouseEvent>) {
    if let Some(ev) = &event {
        ev.prevent_default();
        ev.stop_propagation();
    }
    with_controller(|c| c.open_live_chat());
}

/// Module entry point: run the credential bootstrap, then mount the overlay
/// as soon as the document allows.
///
/// If the document is still loading, mounting waits on a one-shot
/// `DOMContentLoaded` callback; either way `showNotification` also
/// initializes on demand, so callers never depend on load ordering.
#[wasm_bindgen(start)]
pub fn start() {
    bootstrap::run();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let callback =
            Closure::<dyn FnMut()>::new(|| with_controller(|c| c.ensure_initialized()));
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.as_ref().unchecked_ref(),
            &options,
        );
        callback.forget();
    } else {
        with_controller(|c| c.ensure_initialized());
    }
}
