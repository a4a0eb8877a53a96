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

//! Audio-driven avatar expression: level → named weights → avatar frame.

mod frame;
mod gate;

#[cfg(target_arch = "wasm32")]
mod publisher;

pub use frame::ExpressionFrame;
pub use gate::{ExpressionGate, Readiness};

#[cfg(target_arch = "wasm32")]
pub use publisher::ExpressionPublisher;
