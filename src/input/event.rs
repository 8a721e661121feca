/// Platform-agnostic input events.
///
/// These are fed into [`OrbitCamera::handle_event`](crate::camera::OrbitCamera::handle_event)
/// by the winit and browser adapters, or directly by an embedding
/// application with its own event source.
///
/// # Example
///
/// ```ignore
/// let consumed = controls.handle_event(InputEvent::PointerMove {
///     x: event.client_x() as f32,
///     y: event.client_y() as f32,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed at an absolute surface position.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer moved to an absolute surface position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Primary pointer released.
    PointerUp,
    /// Scroll wheel (positive = scroll down / zoom out, matching browser
    /// wheel deltas).
    Wheel {
        /// Signed vertical scroll amount in pixels.
        delta_y: f32,
    },
    /// Touch began. Interface stub: touch gestures are not handled yet.
    TouchStart {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Touch moved. Interface stub: touch gestures are not handled yet.
    TouchMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Touch ended. Interface stub: touch gestures are not handled yet.
    TouchEnd,
}
