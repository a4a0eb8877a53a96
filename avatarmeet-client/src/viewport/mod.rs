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

//! The 3D avatar viewport: scene lifecycle, asset fitting, render loop.

mod generation;
mod normalize;

#[cfg(target_arch = "wasm32")]
mod avatar_viewport;
#[cfg(target_arch = "wasm32")]
mod frame_loop;

pub use generation::AssetGeneration;
pub use normalize::{fit_to_stage, FitTransform};

#[cfg(target_arch = "wasm32")]
pub use avatar_viewport::AvatarViewport;
#[cfg(target_arch = "wasm32")]
pub use frame_loop::FrameLoop;

use thiserror::Error;

/// Errors raised by the viewport. None of them are fatal to the view: an
/// asset-load failure leaves the previous scene state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewportError {
    /// The canvas is not attached to the document yet.
    #[error("viewport canvas is not attached to the document")]
    NotAttached,

    /// WebGL2 is unavailable or context creation failed.
    #[error("could not create a rendering context: {0}")]
    Context(String),

    /// Downloading or decoding the 3D asset failed.
    #[error("could not load 3D asset: {0}")]
    AssetLoad(String),
}
