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

//! Failure taxonomy for media acquisition.

use thiserror::Error;

/// Why `getUserMedia` failed.
///
/// Each variant maps to a distinct user-facing message; anything the
/// browser reports outside the known `DOMException` names falls back to
/// [`CaptureError::Unknown`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// The camera or microphone is already in use by another application.
    #[error("Your camera or microphone is in use by another application.")]
    DeviceBusy,

    /// The user or the OS denied access.
    #[error("Camera and microphone access was denied. Check your browser permissions.")]
    PermissionDenied,

    /// No matching device exists, or the media API is absent entirely.
    #[error("No camera or microphone was found on this device.")]
    Unavailable,

    /// Anything else; carries the browser's own description for the logs.
    #[error("Could not access your camera or microphone.")]
    Unknown(String),
}

impl CaptureError {
    /// Classify a thrown error by name.
    ///
    /// The name set follows the `getUserMedia` specification plus the
    /// legacy aliases some browsers still raise. `TypeError` is what
    /// calling into an absent `mediaDevices` raises (insecure context,
    /// old browser), so it counts as the API being unavailable.
    pub fn from_exception(name: &str, message: &str) -> Self {
        match name {
            "NotReadableError" | "TrackStartError" | "AbortError" => CaptureError::DeviceBusy,
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => {
                CaptureError::PermissionDenied
            }
            "NotFoundError" | "DevicesNotFoundError" | "OverconstrainedError" | "TypeError" => {
                CaptureError::Unavailable
            }
            _ => CaptureError::Unknown(format!("{name}: {message}")),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CaptureError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;
        // getUserMedia rejections are DOMExceptions; a plain JS Error
        // (notably the TypeError from an absent mediaDevices) still has a
        // name worth classifying.
        match value.dyn_into::<web_sys::DomException>() {
            Ok(exception) => Self::from_exception(&exception.name(), &exception.message()),
            Err(other) => match other.dyn_ref::<js_sys::Error>() {
                Some(error) => Self::from_exception(
                    &String::from(error.name()),
                    &String::from(error.message()),
                ),
                None => CaptureError::Unknown(format!("{other:?}")),
            },
        }
    }
}
