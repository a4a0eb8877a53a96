// Copyright 2025 AvatarMeet Contributors
// Licensed under MIT OR Apache-2.0
//
// Browser tests for the pieces that need a real event loop and DOM:
// the animation-frame loop, error classification, and the viewport
// mount/unmount lifecycle.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use avatarmeet_client::capture::CaptureError;
use avatarmeet_client::viewport::{AvatarViewport, FrameLoop, ViewportError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(duration: Duration) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                duration.as_millis() as i32,
            )
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn frame_loop_ticks_every_frame() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&ticks);
    let frame_loop = FrameLoop::start(move || counter.set(counter.get() + 1));

    sleep(Duration::from_millis(100)).await;
    assert!(ticks.get() > 1, "expected multiple ticks, got {}", ticks.get());
    frame_loop.cancel();
}

#[wasm_bindgen_test]
async fn cancel_stops_ticks_synchronously() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&ticks);
    let frame_loop = FrameLoop::start(move || counter.set(counter.get() + 1));

    sleep(Duration::from_millis(50)).await;
    frame_loop.cancel();
    let after_cancel = ticks.get();

    sleep(Duration::from_millis(100)).await;
    assert_eq!(ticks.get(), after_cancel, "tick fired after cancel");
    assert!(frame_loop.is_cancelled());
}

#[wasm_bindgen_test]
async fn cancel_from_inside_a_tick_is_honored() {
    let ticks = Rc::new(Cell::new(0u32));
    let cancel_flag = Rc::new(Cell::new(false));

    let counter = Rc::clone(&ticks);
    let flag = Rc::clone(&cancel_flag);
    let frame_loop = Rc::new(std::cell::RefCell::new(None::<FrameLoop>));
    let loop_handle = Rc::clone(&frame_loop);
    *frame_loop.borrow_mut() = Some(FrameLoop::start(move || {
        counter.set(counter.get() + 1);
        if !flag.get() {
            flag.set(true);
            if let Some(l) = loop_handle.borrow().as_ref() {
                l.cancel();
            }
        }
    }));

    sleep(Duration::from_millis(100)).await;
    assert_eq!(ticks.get(), 1, "loop re-armed after self-cancel");
}

#[wasm_bindgen_test]
fn dom_exceptions_map_to_the_capture_taxonomy() {
    let busy = web_sys::DomException::new_with_message_and_name("in use", "NotReadableError")
        .unwrap();
    assert_eq!(
        CaptureError::from(wasm_bindgen::JsValue::from(busy)),
        CaptureError::DeviceBusy
    );

    let denied = web_sys::DomException::new_with_message_and_name("nope", "NotAllowedError")
        .unwrap();
    assert_eq!(
        CaptureError::from(wasm_bindgen::JsValue::from(denied)),
        CaptureError::PermissionDenied
    );

    let odd = wasm_bindgen::JsValue::from_str("boom");
    assert!(matches!(
        CaptureError::from(odd),
        CaptureError::Unknown(_)
    ));
}

#[wasm_bindgen_test]
fn a_plain_type_error_maps_to_unavailable() {
    // Insecure contexts reject with a TypeError, not a DOMException;
    // it must still land on the missing-device message.
    let raised = wasm_bindgen::JsValue::from(js_sys::TypeError::new(
        "navigator.mediaDevices is undefined",
    ));
    assert_eq!(CaptureError::from(raised), CaptureError::Unavailable);
}

fn make_canvas(attach: bool) -> HtmlCanvasElement {
    let document = gloo_utils::document();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    if attach {
        document.body().unwrap().append_child(&canvas).unwrap();
    }
    canvas
}

#[wasm_bindgen_test]
fn mounting_a_detached_canvas_is_rejected() {
    let canvas = make_canvas(false);
    match AvatarViewport::mount(canvas) {
        Err(ViewportError::NotAttached) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mount accepted a canvas outside the document"),
    }
}

#[wasm_bindgen_test]
async fn unmount_releases_the_scene_and_is_idempotent() {
    let canvas = make_canvas(true);
    // Headless runners may not offer WebGL2; the lifecycle is only
    // observable when the context comes up.
    let Ok(mut viewport) = AvatarViewport::mount(canvas.clone()) else {
        canvas.remove();
        return;
    };
    assert!(viewport.is_mounted());

    // A load still in flight at teardown must resolve without attaching.
    viewport.set_asset("https://example.invalid/avatar.glb");
    viewport.unmount();
    assert!(!viewport.is_mounted());

    viewport.unmount();
    assert!(!viewport.is_mounted());

    sleep(Duration::from_millis(100)).await;
    canvas.remove();
}
