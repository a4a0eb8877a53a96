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

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct SceneEmbedProps {
    /// URL of a `.splinecode` scene.
    pub url: String,
}

/// Full-bleed 3D scene behind a page section.
///
/// `<spline-viewer>` is a custom element registered by the viewer script
/// in `index.html`; the browser renders it as an empty element until the
/// script loads, so pages never block on it.
#[function_component(SceneEmbed)]
pub fn scene_embed(props: &SceneEmbedProps) -> Html {
    html! {
        <div class="scene-embed" aria-hidden="true">
            <spline-viewer url={props.url.clone()}></spline-viewer>
        </div>
    }
}
