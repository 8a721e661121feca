//! Input handling: platform-agnostic event types and the adapters that
//! feed them to the orbit camera from a winit window or a browser canvas.

/// Platform-agnostic input events.
pub mod event;
/// Winit window-event adapter.
#[cfg(feature = "viewer")]
pub mod handler;
/// Browser canvas adapter with DOM listener lifecycle.
#[cfg(feature = "web")]
pub mod web;

pub use event::InputEvent;
#[cfg(feature = "viewer")]
pub use handler::InputHandler;
#[cfg(feature = "web")]
pub use web::CanvasControls;
