//! `requestAnimationFrame` frame host

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{FrameHost, SurfaceError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Slot holding the per-frame callback. Filled once the frame loop exists
/// (the callback needs a reference to it) and emptied on teardown.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafHost {
    window: Window,
    callback: FrameCallback,
}

impl RafHost {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, SurfaceError> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref().ok_or(SurfaceError::Detached)?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Schedule(format!("{e:?}")))
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::debug!("cancelAnimationFrame({handle}) failed: {e:?}");
        }
    }
}
