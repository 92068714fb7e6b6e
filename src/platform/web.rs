//! Browser input plumbing
//!
//! Relative mouse motion comes from `movementX/movementY`, which keep
//! reporting while the pointer is locked to the arena.

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::input::{PointerSink, PointerSource};

/// `mousemove` listener feeding a `PointerSink`
pub struct MouseMoveSource {
    target: Element,
    listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl MouseMoveSource {
    pub fn new(target: Element) -> Self {
        Self {
            target,
            listener: None,
        }
    }
}

impl PointerSource for MouseMoveSource {
    fn attach(&mut self, sink: PointerSink) {
        self.detach();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            sink.push(event.movement_x() as f32, event.movement_y() as f32);
        });
        if let Err(e) = self
            .target
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach mousemove listener: {:?}", e);
            return;
        }
        self.listener = Some(closure);
        log::info!("Pointer input attached");
    }

    fn detach(&mut self) {
        if let Some(closure) = self.listener.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            log::info!("Pointer input detached");
        }
    }
}

impl Drop for MouseMoveSource {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Grab the pointer so motion keeps flowing past the window edge
pub fn request_pointer_lock(target: &Element) {
    target.request_pointer_lock();
}
