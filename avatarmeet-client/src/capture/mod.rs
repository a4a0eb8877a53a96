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

//! Local camera/microphone capture and the per-frame speech-energy level.

mod error;
mod level;
mod state;

#[cfg(target_arch = "wasm32")]
mod session;

pub use error::CaptureError;
pub use level::level_from_bins;
pub use state::CaptureState;

#[cfg(target_arch = "wasm32")]
pub use session::CaptureSession;
