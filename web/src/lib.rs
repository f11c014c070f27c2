//! Browser binding for the Vanstra notification module.
//!
//! Compiled to wasm and loaded once per page. Exposes the global activation
//! API (`showNotification`, `closeNotification`, `showComingSoon`,
//! `openLiveChat`) so arbitrary application code and inline handlers can
//! drive the overlay without holding a controller reference, and runs the
//! credential bootstrap at module start.
//!
//! The DOM layer only exists on the wasm target; host builds of the
//! workspace compile this crate to an empty library.

#[cfg(target_arch = "wasm32")]
mod bootstrap;
#[cfg(target_arch = "wasm32")]
mod chat;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod global;

#[cfg(target_arch = "wasm32")]
pub use global::{close_notification, open_live_chat, show_coming_soon, show_notification};
