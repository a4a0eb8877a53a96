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

use avatarmeet_client::CaptureError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaBannerProps {
    pub error: CaptureError,
}

/// Inline warning shown when camera/microphone acquisition fails. The
/// room stays usable; only the self-view and meter are affected.
#[function_component(MediaBanner)]
pub fn media_banner(props: &MediaBannerProps) -> Html {
    html! {
        <div class="media-banner" role="alert">
            <span class="media-banner-icon">{ "⚠" }</span>
            <span>{ props.error.to_string() }</span>
        </div>
    }
}
