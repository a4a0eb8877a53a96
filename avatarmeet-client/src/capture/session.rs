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

//! The local capture session: camera + microphone stream, self-view
//! attachment, and the per-frame speech-energy sampling loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_utils::window;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AudioContext, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack,
};

use super::error::CaptureError;
use super::level::level_from_bins;
use super::state::CaptureState;
use crate::constants::ANALYSER_FFT_SIZE;
use crate::viewport::FrameLoop;

/// One camera/microphone session per mounted room view.
///
/// `start()` returns immediately; acquisition runs in the background and
/// reports through the callbacks. Mute/camera toggles flip track `enabled`
/// flags on the existing stream so device permission is never re-acquired.
/// `stop()` is terminal and idempotent; a grant that arrives after `stop()`
/// releases its tracks and mutates nothing.
pub struct CaptureSession {
    state: Rc<Cell<CaptureState>>,
    stream: Rc<RefCell<Option<MediaStream>>>,
    audio_context: Rc<RefCell<Option<AudioContext>>>,
    sample_loop: Rc<RefCell<Option<FrameLoop>>>,

    /// Called once per animation frame with the current level in [0, 1].
    on_level: Rc<RefCell<Rc<dyn Fn(f32)>>>,
    /// Called when the stream is live and the sampling loop is running.
    on_started: Rc<RefCell<Rc<dyn Fn()>>>,
    /// Called when acquisition fails, with the classified error.
    on_error: Rc<RefCell<Rc<dyn Fn(CaptureError)>>>,
}

#[allow(clippy::new_without_default)]
impl CaptureSession {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(CaptureState::Idle)),
            stream: Rc::new(RefCell::new(None)),
            audio_context: Rc::new(RefCell::new(None)),
            sample_loop: Rc::new(RefCell::new(None)),
            on_level: Rc::new(RefCell::new(Rc::new(|_| {}))),
            on_started: Rc::new(RefCell::new(Rc::new(|| {}))),
            on_error: Rc::new(RefCell::new(Rc::new(|_| {}))),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state.get()
    }

    pub fn set_on_level(&self, callback: Rc<dyn Fn(f32)>) {
        *self.on_level.borrow_mut() = callback;
    }

    pub fn set_on_started(&self, callback: Rc<dyn Fn()>) {
        *self.on_started.borrow_mut() = callback;
    }

    pub fn set_on_error(&self, callback: Rc<dyn Fn(CaptureError)>) {
        *self.on_error.borrow_mut() = callback;
    }

    /// Request camera + microphone, attach the stream to the (muted)
    /// self-view element, and start the level sampling loop.
    ///
    /// No-op unless the session is `Idle`.
    pub fn start(&self, video: HtmlVideoElement) {
        if self.state.get() != CaptureState::Idle {
            return;
        }
        self.state.set(self.state.get().requested());

        let state = Rc::clone(&self.state);
        let stream_slot = Rc::clone(&self.stream);
        let audio_context_slot = Rc::clone(&self.audio_context);
        let sample_loop_slot = Rc::clone(&self.sample_loop);
        let on_level = Rc::clone(&self.on_level);
        let on_started = Rc::clone(&self.on_started);
        let on_error = Rc::clone(&self.on_error);
        wasm_bindgen_futures::spawn_local(async move {
            let stream = match acquire_stream().await {
                Ok(stream) => stream,
                Err(error) => {
                    log::error!("media acquisition failed: {error}");
                    state.set(state.get().denied());
                    (on_error.borrow().clone())(error);
                    return;
                }
            };

            // The view may have unmounted while the permission prompt was
            // open; release what we were just given and walk away.
            if state.get().is_stopped() {
                stop_tracks(&stream);
                return;
            }

            // Self-view: always muted locally to avoid feedback.
            video.set_muted(true);
            video.set_src_object(Some(&stream));

            match build_sampling_loop(&stream, &on_level) {
                Ok((audio_context, sample_loop)) => {
                    *audio_context_slot.borrow_mut() = Some(audio_context);
                    *sample_loop_slot.borrow_mut() = Some(sample_loop);
                }
                Err(e) => {
                    // The meter degrades independently; the stream stays up.
                    log::warn!("audio level meter unavailable: {e:?}");
                }
            }

            *stream_slot.borrow_mut() = Some(stream);
            state.set(state.get().granted());
            (on_started.borrow().clone())();
        });
    }

    /// Flip the microphone tracks' `enabled` flag. Returns the new muted
    /// state, or `None` when no stream is active.
    pub fn toggle_mute(&self) -> Option<bool> {
        let next = self.state.get().toggled_mute();
        if !next.is_active() {
            return None;
        }
        let stream = self.stream.borrow();
        let stream = stream.as_ref()?;
        for track in iter_tracks(&stream.get_audio_tracks()) {
            track.set_enabled(!next.is_muted());
        }
        self.state.set(next);
        Some(next.is_muted())
    }

    /// Flip the camera tracks' `enabled` flag. Returns the new camera-off
    /// state, or `None` when no stream is active.
    pub fn toggle_camera(&self) -> Option<bool> {
        let next = self.state.get().toggled_camera();
        if !next.is_active() {
            return None;
        }
        let stream = self.stream.borrow();
        let stream = stream.as_ref()?;
        for track in iter_tracks(&stream.get_video_tracks()) {
            track.set_enabled(!next.is_camera_off());
        }
        self.state.set(next);
        Some(next.is_camera_off())
    }

    /// Cancel the sampling loop, close the audio graph, stop every track,
    /// release the stream. Terminal and idempotent.
    pub fn stop(&self) {
        self.state.set(self.state.get().stopped());
        if let Some(sample_loop) = self.sample_loop.borrow_mut().take() {
            sample_loop.cancel();
        }
        if let Some(audio_context) = self.audio_context.borrow_mut().take() {
            let _ = audio_context.close();
        }
        if let Some(stream) = self.stream.borrow_mut().take() {
            stop_tracks(&stream);
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn acquire_stream() -> Result<MediaStream, CaptureError> {
    let media_devices = window()
        .navigator()
        .media_devices()
        .map_err(CaptureError::from)?;
    // Insecure contexts and old browsers expose the property as
    // undefined; the getter above does not catch that.
    if media_devices.is_undefined() {
        return Err(CaptureError::Unavailable);
    }
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::from_bool(true));
    constraints.set_video(&JsValue::from_bool(true));
    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(CaptureError::from)?;
    let stream = JsFuture::from(promise).await.map_err(CaptureError::from)?;
    stream.dyn_into::<MediaStream>().map_err(CaptureError::from)
}

/// Microphone → `AnalyserNode`, sampled once per animation frame into the
/// level callback.
fn build_sampling_loop(
    stream: &MediaStream,
    on_level: &Rc<RefCell<Rc<dyn Fn(f32)>>>,
) -> Result<(AudioContext, FrameLoop), JsValue> {
    let audio_context = AudioContext::new()?;
    let source = audio_context.create_media_stream_source(stream)?;
    let analyser = audio_context.create_analyser()?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    source.connect_with_audio_node(&analyser)?;

    let mut bins = vec![0u8; analyser.frequency_bin_count() as usize];
    let on_level = Rc::clone(on_level);
    let sample_loop = FrameLoop::start(move || {
        analyser.get_byte_frequency_data(&mut bins);
        (on_level.borrow().clone())(level_from_bins(&bins));
    });
    Ok((audio_context, sample_loop))
}

fn stop_tracks(stream: &MediaStream) {
    for track in iter_tracks(&stream.get_tracks()) {
        track.stop();
    }
}

fn iter_tracks(tracks: &js_sys::Array) -> impl Iterator<Item = MediaStreamTrack> + '_ {
    tracks
        .iter()
        .filter_map(|t| t.dyn_into::<MediaStreamTrack>().ok())
}
