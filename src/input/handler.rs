use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::event::InputEvent;
use crate::camera::OrbitCamera;

/// Pixel delta for one wheel line, sized like one browser wheel notch.
const WHEEL_LINE_PIXELS: f32 = 100.0;

/// Translates winit window events into [`InputEvent`]s for the orbit
/// camera.
///
/// Winit reports button presses without coordinates, so the handler tracks
/// the last cursor position to synthesize pointer-down events.
pub struct InputHandler {
    last_mouse_pos: Vec2,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler with no cursor history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_mouse_pos: Vec2::ZERO,
        }
    }

    /// Feed a window event to the camera.
    ///
    /// Returns `true` if the event was consumed by the camera. Wheel
    /// deltas are converted to browser-style pixel deltas (positive =
    /// scroll down / zoom out). Resize events update the camera's viewport
    /// and are never reported as consumed.
    pub fn handle_event(
        &mut self,
        controls: &mut OrbitCamera,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let event = if *state == ElementState::Pressed {
                    InputEvent::PointerDown {
                        x: self.last_mouse_pos.x,
                        y: self.last_mouse_pos.y,
                    }
                } else {
                    InputEvent::PointerUp
                };
                controls.handle_event(event)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current =
                    Vec2::new(position.x as f32, position.y as f32);
                self.last_mouse_pos = current;
                controls.handle_event(InputEvent::PointerMove {
                    x: current.x,
                    y: current.y,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Winit scroll-up is positive; browser deltaY is negative.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        -y * WHEEL_LINE_PIXELS
                    }
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                controls.handle_event(InputEvent::Wheel { delta_y })
            }
            WindowEvent::Resized(size) => {
                controls.resize(size.width, size.height);
                false
            }
            _ => false,
        }
    }
}
