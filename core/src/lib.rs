pub mod chat;
pub mod controller;
pub mod style;
pub mod surface;

// Re-exports for convenience
pub use chat::{ChatTransport, FallbackChat};
pub use controller::{CloseOrigin, OverlayController, OverlayState};
pub use surface::RenderSurface;
