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

//! Delivery of expression frames to the embedded avatar renderer.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::HtmlIFrameElement;

use super::frame::ExpressionFrame;
use super::gate::{ExpressionGate, Readiness};

/// Envelope posted to the avatar frame. Delivery is fire-and-forget over
/// the ordered `postMessage` channel; there is no acknowledgment.
#[derive(Serialize)]
struct ExpressionMessage<'a> {
    target: &'static str,
    #[serde(rename = "eventName")]
    event_name: &'static str,
    data: &'a ExpressionFrame,
}

/// Publishes expression frames to the avatar iframe once it has signaled
/// readiness. Frames published earlier are dropped by the gate.
pub struct ExpressionPublisher {
    gate: ExpressionGate,
    target: Option<web_sys::Window>,
}

#[allow(clippy::new_without_default)]
impl ExpressionPublisher {
    pub fn new() -> Self {
        Self {
            gate: ExpressionGate::new(),
            target: None,
        }
    }

    /// Point the publisher at the avatar iframe's window.
    pub fn attach(&mut self, iframe: &HtmlIFrameElement) {
        self.target = iframe.content_window();
    }

    /// Record the frame's readiness signal; publishing is unlocked from
    /// here on.
    pub fn mark_ready(&mut self) {
        self.gate.mark_ready();
    }

    pub fn is_ready(&self) -> bool {
        self.gate.readiness() == Readiness::Ready
    }

    /// Send one expression frame. Returns `true` if the message was
    /// posted; `false` if it was dropped by the gate or no frame is
    /// attached.
    pub fn publish(&mut self, frame: ExpressionFrame) -> bool {
        let Some(frame) = self.gate.admit(frame) else {
            return false;
        };
        let Some(target) = &self.target else {
            return false;
        };
        let message = ExpressionMessage {
            target: "avatarmeet-avatar",
            event_name: "avatar.expression",
            data: &frame,
        };
        match serde_json::to_string(&message) {
            Ok(json) => target
                .post_message(&JsValue::from_str(&json), "*")
                .map_err(|e| log::warn!("expression post failed: {e:?}"))
                .is_ok(),
            Err(e) => {
                log::warn!("expression serialization failed: {e}");
                false
            }
        }
    }
}
