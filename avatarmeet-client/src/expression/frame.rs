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

//! Named expression weights derived from the speech-energy level.

use serde::{Deserialize, Serialize};

use crate::constants::JAW_GAIN;

/// One frame of facial pose weights, ephemeral and recomputed every
/// animation frame. The two weights are complementary by construction:
/// `jaw_open + mouth_close == 1` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpressionFrame {
    #[serde(rename = "jawOpen")]
    pub jaw_open: f32,
    #[serde(rename = "mouthClose")]
    pub mouth_close: f32,
}

impl ExpressionFrame {
    /// Map a speech-energy level in [0, 1] to expression weights.
    ///
    /// The [`JAW_GAIN`] makes small speech energy visibly open the jaw;
    /// the result is clamped so the weight stays a valid blend-shape
    /// value.
    pub fn from_level(level: f32) -> Self {
        let jaw_open = (level * JAW_GAIN).clamp(0.0, 1.0);
        Self {
            jaw_open,
            mouth_close: 1.0 - jaw_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_complementary_across_the_level_range() {
        for i in 0..=1000 {
            let level = i as f32 / 1000.0;
            let frame = ExpressionFrame::from_level(level);
            assert!(
                (frame.jaw_open + frame.mouth_close - 1.0).abs() < 1e-6,
                "level={level}"
            );
            assert!((0.0..=1.0).contains(&frame.jaw_open));
            assert!((0.0..=1.0).contains(&frame.mouth_close));
        }
    }

    #[test]
    fn silence_closes_the_jaw() {
        let frame = ExpressionFrame::from_level(0.0);
        assert_eq!(frame.jaw_open, 0.0);
        assert_eq!(frame.mouth_close, 1.0);
    }

    #[test]
    fn gain_saturates_before_full_level() {
        // 1.4 gain: levels above ~0.714 already open the jaw fully.
        let frame = ExpressionFrame::from_level(0.75);
        assert_eq!(frame.jaw_open, 1.0);
        assert_eq!(frame.mouth_close, 0.0);
    }

    #[test]
    fn quiet_speech_is_amplified() {
        let frame = ExpressionFrame::from_level(0.5);
        assert!((frame.jaw_open - 0.7).abs() < 1e-6);
    }

    #[test]
    fn serializes_with_the_avatar_renderer_field_names() {
        let json = serde_json::to_string(&ExpressionFrame::from_level(0.0)).unwrap();
        assert!(json.contains("\"jawOpen\""));
        assert!(json.contains("\"mouthClose\""));
    }
}
