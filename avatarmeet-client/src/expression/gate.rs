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

//! Readiness gate guarding expression delivery.
//!
//! The embedded avatar renderer has no buffering contract, so frames
//! produced before it signals readiness are dropped, not queued. The
//! first moments of speech may therefore be lost; that matches the
//! renderer's documented behavior.

use super::frame::ExpressionFrame;

/// Whether the remote avatar frame has completed its handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

/// Two-state gate in front of the message channel.
#[derive(Debug, Default)]
pub struct ExpressionGate {
    readiness: Readiness,
    dropped: u64,
}

impl ExpressionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Record the remote frame's readiness signal. Latching: once ready,
    /// always ready for the lifetime of the gate.
    pub fn mark_ready(&mut self) {
        self.readiness = Readiness::Ready;
    }

    /// Frames dropped because they arrived before readiness.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Pass `frame` through if the remote side is ready; otherwise drop
    /// it and return `None`.
    pub fn admit(&mut self, frame: ExpressionFrame) -> Option<ExpressionFrame> {
        match self.readiness {
            Readiness::Ready => Some(frame),
            Readiness::NotReady => {
                self.dropped += 1;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_before_readiness_are_dropped_not_queued() {
        let mut gate = ExpressionGate::new();
        for _ in 0..3 {
            assert!(gate.admit(ExpressionFrame::from_level(0.5)).is_none());
        }
        assert_eq!(gate.dropped(), 3);

        gate.mark_ready();
        // Nothing buffered is flushed; only new frames pass.
        assert!(gate.admit(ExpressionFrame::from_level(0.5)).is_some());
        assert_eq!(gate.dropped(), 3);
    }

    #[test]
    fn readiness_latches() {
        let mut gate = ExpressionGate::new();
        gate.mark_ready();
        gate.mark_ready();
        assert_eq!(gate.readiness(), Readiness::Ready);
        assert!(gate.admit(ExpressionFrame::from_level(0.0)).is_some());
    }
}
