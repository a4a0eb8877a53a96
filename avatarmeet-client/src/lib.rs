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

//! Browser-side core of the AvatarMeet client: local media capture with a
//! per-frame speech-energy level, the audio-driven avatar expression
//! pipeline, and the 3D avatar viewport lifecycle.
//!
//! This crate makes no assumptions about the UI framework. The only DOM
//! data it needs is handed in by the caller: the `HtmlVideoElement` for the
//! self-view, the `HtmlCanvasElement` for the avatar viewport, and the
//! avatar iframe's window for expression messages.
//!
//! # Outline of usage
//!
//! ## Capture session (camera + microphone + level meter):
//! ```ignore
//! let session = CaptureSession::new();
//! session.set_on_level(...);   // called once per animation frame
//! session.set_on_error(...);   // distinct messages per failure kind
//! session.start(video_element);
//! session.toggle_mute();
//! session.stop();
//! ```
//!
//! ## Avatar viewport:
//! ```ignore
//! let mut viewport = AvatarViewport::mount(canvas)?;
//! viewport.set_asset("https://models.example/avatar.glb");
//! // ... idle rotation renders every frame ...
//! viewport.unmount();
//! ```
//!
//! ## Expression publishing:
//! ```ignore
//! let mut publisher = ExpressionPublisher::new();
//! publisher.attach(&iframe);
//! publisher.mark_ready();       // after the frame's readiness signal
//! publisher.publish(ExpressionFrame::from_level(level));
//! ```
//!
//! Everything that is pure logic (level derivation, expression weights, the
//! readiness gate, bounding-box fitting, the capture state machine) lives in
//! target-independent modules with native unit tests; the DOM/WebGL glue is
//! compiled for `wasm32` only.

pub mod avatar;
pub mod capture;
pub mod constants;
pub mod expression;
pub mod viewport;

pub use capture::{CaptureError, CaptureState};
pub use expression::{ExpressionFrame, ExpressionGate, Readiness};
pub use viewport::ViewportError;

#[cfg(target_arch = "wasm32")]
pub use capture::CaptureSession;
#[cfg(target_arch = "wasm32")]
pub use expression::ExpressionPublisher;
#[cfg(target_arch = "wasm32")]
pub use viewport::AvatarViewport;
