/*
 * Copyright 2025 AvatarMeet Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Cooperative `requestAnimationFrame` loop with synchronous cancellation.
//!
//! Both the render tick and the audio-sampling tick run on one of these:
//! the closure re-arms itself after each invocation, and `cancel()`
//! guarantees no further tick fires once it returns, even if the browser
//! already scheduled the next frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_utils::window;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// A running animation-frame loop. Dropping it cancels it.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    // Keeps the self-re-arming closure alive for the lifetime of the loop.
    _closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Start calling `tick` once per display refresh, beginning with the
    /// next frame.
    pub fn start<F: FnMut() + 'static>(mut tick: F) -> Self {
        let cancelled = Rc::new(Cell::new(false));
        let handle = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let cancelled_in_tick = Rc::clone(&cancelled);
        let handle_in_tick = Rc::clone(&handle);
        let closure_in_tick = Rc::clone(&closure);
        *closure.borrow_mut() = Some(Closure::new(move || {
            if cancelled_in_tick.get() {
                return;
            }
            tick();
            // The tick itself may have cancelled the loop.
            if cancelled_in_tick.get() {
                return;
            }
            if let Some(closure) = closure_in_tick.borrow().as_ref() {
                handle_in_tick.set(request_frame(closure));
            }
        }));

        if let Some(closure) = closure.borrow().as_ref() {
            handle.set(request_frame(closure));
        }

        Self {
            cancelled,
            handle,
            _closure: closure,
        }
    }

    /// Stop the loop. No tick fires after this returns. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.handle.take() {
            let _ = window().cancel_animation_frame(id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    window()
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
