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

//! Speech-energy level derivation from analyser frequency bins.

use crate::constants::{LEVEL_BIN_COUNT, LEVEL_CEILING};

/// Reduce one analyser snapshot to a normalized level in `[0, 1]`.
///
/// Averages the lowest [`LEVEL_BIN_COUNT`] bins (a rough vocal-energy
/// proxy), normalizes by [`LEVEL_CEILING`] and clamps. Deliberately cheap:
/// it runs once per animation frame.
pub fn level_from_bins(bins: &[u8]) -> f32 {
    let slice = &bins[..bins.len().min(LEVEL_BIN_COUNT)];
    if slice.is_empty() {
        return 0.0;
    }
    let sum: u32 = slice.iter().map(|b| u32::from(*b)).sum();
    let avg = sum as f32 / slice.len() as f32;
    (avg / LEVEL_CEILING).clamp(0.0, 1.0)
}
