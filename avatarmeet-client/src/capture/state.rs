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

//! Capture session state machine.
//!
//! `Idle → Requesting → Active ⇄ {muted, camera off} → Stopped`.
//! `Stopped` is terminal; re-entering capture requires a new session.

/// Lifecycle state of a [`CaptureSession`](crate::capture::CaptureSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// `getUserMedia` is in flight.
    Requesting,
    /// Stream acquired; tracks can be toggled without re-acquisition.
    Active { muted: bool, camera_off: bool },
    Stopped,
}

impl CaptureState {
    /// Transition taken when `start()` is called.
    pub fn requested(self) -> Self {
        match self {
            CaptureState::Idle => CaptureState::Requesting,
            other => other,
        }
    }

    /// Transition taken when the stream resolves.
    pub fn granted(self) -> Self {
        match self {
            CaptureState::Requesting => CaptureState::Active {
                muted: false,
                camera_off: false,
            },
            other => other,
        }
    }

    /// Transition taken when acquisition fails; the session can retry.
    pub fn denied(self) -> Self {
        match self {
            CaptureState::Requesting => CaptureState::Idle,
            other => other,
        }
    }

    /// Transition taken when `stop()` is called. Terminal.
    pub fn stopped(self) -> Self {
        CaptureState::Stopped
    }

    pub fn toggled_mute(self) -> Self {
        match self {
            CaptureState::Active { muted, camera_off } => CaptureState::Active {
                muted: !muted,
                camera_off,
            },
            other => other,
        }
    }

    pub fn toggled_camera(self) -> Self {
        match self {
            CaptureState::Active { muted, camera_off } => CaptureState::Active {
                muted,
                camera_off: !camera_off,
            },
            other => other,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CaptureState::Active { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, CaptureState::Stopped)
    }

    pub fn is_muted(&self) -> bool {
        matches!(self, CaptureState::Active { muted: true, .. })
    }

    pub fn is_camera_off(&self) -> bool {
        matches!(self, CaptureState::Active { camera_off: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_active() {
        let state = CaptureState::Idle.requested().granted();
        assert!(state.is_active());
        assert!(!state.is_muted());
        assert!(!state.is_camera_off());
    }

    #[test]
    fn denial_returns_to_idle() {
        assert_eq!(
            CaptureState::Idle.requested().denied(),
            CaptureState::Idle
        );
    }

    #[test]
    fn toggling_mute_twice_restores_the_original_state() {
        let active = CaptureState::Idle.requested().granted();
        let twice = active.toggled_mute().toggled_mute();
        assert_eq!(active, twice);
    }

    #[test]
    fn mute_and_camera_flags_are_independent() {
        let state = CaptureState::Idle
            .requested()
            .granted()
            .toggled_mute()
            .toggled_camera();
        assert!(state.is_muted());
        assert!(state.is_camera_off());
        assert!(!state.toggled_mute().is_muted());
    }

    #[test]
    fn stopped_is_terminal() {
        let stopped = CaptureState::Stopped;
        assert_eq!(stopped.requested(), CaptureState::Stopped);
        assert_eq!(stopped.granted(), CaptureState::Stopped);
        assert_eq!(stopped.toggled_mute(), CaptureState::Stopped);
        assert_eq!(stopped.toggled_camera(), CaptureState::Stopped);
    }

    #[test]
    fn toggles_outside_active_are_no_ops() {
        assert_eq!(CaptureState::Idle.toggled_mute(), CaptureState::Idle);
        assert_eq!(
            CaptureState::Requesting.toggled_camera(),
            CaptureState::Requesting
        );
    }
}
