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

//! Webcam self-view with the audio level meter and mute/camera toggles.
//!
//! Purely presentational: the capture session lives in the room page and
//! hands down the video element ref, the current level, and callbacks.

use avatarmeet_client::CaptureError;
use yew::prelude::*;

use crate::components::media_banner::MediaBanner;

#[derive(Properties, PartialEq)]
pub struct SelfViewProps {
    pub video_ref: NodeRef,
    /// Speech energy in [0, 1], already smoothed by the sampling rate.
    pub level: f32,
    pub muted: bool,
    pub camera_off: bool,
    pub media_error: Option<CaptureError>,
    pub on_toggle_mute: Callback<()>,
    pub on_toggle_camera: Callback<()>,
}

#[function_component(SelfView)]
pub fn self_view(props: &SelfViewProps) -> Html {
    // Never fully empty, so the meter reads as alive even in silence.
    let meter_width = format!("width: {}%", (props.level * 100.0).max(6.0));

    let on_toggle_mute = props.on_toggle_mute.reform(|_: MouseEvent| ());
    let on_toggle_camera = props.on_toggle_camera.reform(|_: MouseEvent| ());

    html! {
        <div class="self-view">
            if let Some(error) = &props.media_error {
                <MediaBanner error={error.clone()} />
            }
            <div class="self-view-video-wrap">
                <video
                    ref={props.video_ref.clone()}
                    autoplay=true
                    playsinline=true
                    muted=true
                    class="self-view-video"
                />
                <div class="level-meter">
                    <div class="level-meter-fill" style={meter_width} />
                </div>
            </div>
            <div class="self-view-controls">
                <button
                    class={classes!("control-button", props.muted.then_some("off"))}
                    onclick={on_toggle_mute}
                >
                    { if props.muted { "Unmute" } else { "Mute" } }
                </button>
                <button
                    class={classes!("control-button", props.camera_off.then_some("off"))}
                    onclick={on_toggle_camera}
                >
                    { if props.camera_off { "Camera Off" } else { "Camera On" } }
                </button>
            </div>
        </div>
    }
}
