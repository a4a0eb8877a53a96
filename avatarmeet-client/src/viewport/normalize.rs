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

//! Bounding-box fitting for loaded avatar assets.

use crate::constants::{FIT_SIZE, GROUND_OFFSET};

/// How to place a loaded asset on the stage: translate its bounding-box
/// center to the origin, scale its largest dimension to [`FIT_SIZE`], then
/// drop it by [`GROUND_OFFSET`] so it stands on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    /// Bounding-box center in the asset's own coordinates.
    pub center: [f32; 3],
    /// Uniform scale factor.
    pub scale: f32,
    /// Vertical offset applied after centering and scaling.
    pub y_offset: f32,
}

impl FitTransform {
    /// Apply the transform to a point, in the same order the scene graph
    /// composes it: center, scale, then ground offset.
    pub fn apply(&self, point: [f32; 3]) -> [f32; 3] {
        [
            (point[0] - self.center[0]) * self.scale,
            (point[1] - self.center[1]) * self.scale + self.y_offset,
            (point[2] - self.center[2]) * self.scale,
        ]
    }
}

/// Compute the stage placement for an asset with the given axis-aligned
/// bounds. A degenerate box (zero extent in every axis) keeps scale 1 so a
/// broken asset renders where it is instead of dividing by zero.
pub fn fit_to_stage(min: [f32; 3], max: [f32; 3]) -> FitTransform {
    let center = [
        (min[0] + max[0]) * 0.5,
        (min[1] + max[1]) * 0.5,
        (min[2] + max[2]) * 0.5,
    ];
    let size = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
    let max_dim = size[0].max(size[1]).max(size[2]);
    let scale = if max_dim > f32::EPSILON {
        FIT_SIZE / max_dim
    } else {
        1.0
    };
    FitTransform {
        center,
        scale,
        y_offset: -GROUND_OFFSET,
    }
}
