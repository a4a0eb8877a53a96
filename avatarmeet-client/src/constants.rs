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

//! Tuning constants for the capture and viewport pipelines.

/// FFT window of the microphone analyser node.
pub const ANALYSER_FFT_SIZE: u32 = 256;

/// Number of low-frequency bins averaged into the speech-energy level.
/// Voice energy concentrates in the low end of the spectrum, so this is a
/// cheap proxy rather than real pitch analysis.
pub const LEVEL_BIN_COUNT: usize = 16;

/// Normalization ceiling for the averaged bin magnitude (bins are u8).
pub const LEVEL_CEILING: f32 = 160.0;

/// Gain applied to the level before clamping into the jaw-open weight.
/// Makes quiet speech visibly open the jaw.
pub const JAW_GAIN: f32 = 1.4;

/// Largest dimension of a fitted avatar asset, in world units.
pub const FIT_SIZE: f32 = 1.6;

/// Downward offset applied after fitting so the avatar stands on the
/// ground plane instead of floating at the origin.
pub const GROUND_OFFSET: f32 = 0.9;

/// Vertical field of view of the viewport camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;

/// Near and far clip planes of the viewport camera.
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Idle rotation advanced per rendered frame, in radians.
pub const IDLE_SPIN_PER_FRAME: f32 = 0.005;
