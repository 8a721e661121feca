use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, HtmlCanvasElement, MouseEvent, WheelEvent,
};

use super::event::InputEvent;
use crate::camera::OrbitCamera;
use crate::error::OrreryError;

/// Binds an [`OrbitCamera`] to a browser canvas.
///
/// Registers named, storable listener closures so registration and removal
/// stay symmetric: pointer-down and wheel on the canvas, pointer-move and
/// pointer-up on the window (a drag keeps tracking after the pointer
/// leaves the canvas bounds). The wheel listener is registered with
/// `passive: false` and prevents the default scroll.
///
/// [`dispose`](Self::dispose) removes every listener and disposes the
/// controller; it is idempotent and safe to call mid-drag. Dropping the
/// binding without disposing would leave the DOM invoking freed closures,
/// so `Drop` falls back to [`dispose`](Self::dispose).
pub struct CanvasControls {
    controls: Rc<RefCell<OrbitCamera>>,
    canvas: HtmlCanvasElement,
    window: web_sys::Window,
    on_pointer_down: Closure<dyn FnMut(MouseEvent)>,
    on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
    on_pointer_up: Closure<dyn FnMut(MouseEvent)>,
    on_wheel: Closure<dyn FnMut(WheelEvent)>,
    attached: bool,
}

fn dom_error(value: JsValue) -> OrreryError {
    OrreryError::Dom(format!("{value:?}"))
}

impl CanvasControls {
    /// Attach the controller to `canvas`.
    ///
    /// # Errors
    ///
    /// [`OrreryError::Dom`] when no global window exists or a listener
    /// cannot be registered.
    pub fn new(
        controls: Rc<RefCell<OrbitCamera>>,
        canvas: HtmlCanvasElement,
    ) -> Result<Self, OrreryError> {
        let window = web_sys::window()
            .ok_or_else(|| OrreryError::Dom("no window object".into()))?;

        let on_pointer_down = {
            let controls = Rc::clone(&controls);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let _ = controls.borrow_mut().handle_event(
                    InputEvent::PointerDown {
                        x: event.client_x() as f32,
                        y: event.client_y() as f32,
                    },
                );
            })
        };
        let on_pointer_move = {
            let controls = Rc::clone(&controls);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let _ = controls.borrow_mut().handle_event(
                    InputEvent::PointerMove {
                        x: event.client_x() as f32,
                        y: event.client_y() as f32,
                    },
                );
            })
        };
        let on_pointer_up = {
            let controls = Rc::clone(&controls);
            Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                let _ = controls
                    .borrow_mut()
                    .handle_event(InputEvent::PointerUp);
            })
        };
        let on_wheel = {
            let controls = Rc::clone(&controls);
            Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
                // The page must never scroll over the canvas, whatever the
                // camera's enable state.
                event.prevent_default();
                let _ = controls.borrow_mut().handle_event(InputEvent::Wheel {
                    delta_y: event.delta_y() as f32,
                });
            })
        };

        canvas
            .add_event_listener_with_callback(
                "mousedown",
                on_pointer_down.as_ref().unchecked_ref(),
            )
            .map_err(dom_error)?;
        let wheel_options = AddEventListenerOptions::new();
        wheel_options.set_passive(false);
        canvas
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                on_wheel.as_ref().unchecked_ref(),
                &wheel_options,
            )
            .map_err(dom_error)?;
        window
            .add_event_listener_with_callback(
                "mousemove",
                on_pointer_move.as_ref().unchecked_ref(),
            )
            .map_err(dom_error)?;
        window
            .add_event_listener_with_callback(
                "mouseup",
                on_pointer_up.as_ref().unchecked_ref(),
            )
            .map_err(dom_error)?;

        log::debug!("canvas controls attached");

        Ok(Self {
            controls,
            canvas,
            window,
            on_pointer_down,
            on_pointer_move,
            on_pointer_up,
            on_wheel,
            attached: true,
        })
    }

    /// Shared handle to the bound controller, for the render loop.
    #[must_use]
    pub fn controller(&self) -> Rc<RefCell<OrbitCamera>> {
        Rc::clone(&self.controls)
    }

    /// Remove all listeners and dispose the controller.
    ///
    /// Idempotent; safe to call while a drag is in progress.
    pub fn dispose(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        let _ = self.canvas.remove_event_listener_with_callback(
            "mousedown",
            self.on_pointer_down.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "wheel",
            self.on_wheel.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mouseup",
            self.on_pointer_up.as_ref().unchecked_ref(),
        );

        self.controls.borrow_mut().dispose();
        log::debug!("canvas controls disposed; listeners removed");
    }
}

impl Drop for CanvasControls {
    fn drop(&mut self) {
        self.dispose();
    }
}
