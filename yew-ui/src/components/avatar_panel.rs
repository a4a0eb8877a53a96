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

//! Avatar column of the room view: the 3D viewport canvas and the
//! creation iframe below it.
//!
//! The room page owns the viewport session and the iframe messaging;
//! this component only provides the elements, reached through the refs.

use yew::prelude::*;

use crate::constants::AVATAR_CREATOR_URL;

#[derive(Properties, PartialEq)]
pub struct AvatarPanelProps {
    pub canvas_ref: NodeRef,
    pub creator_ref: NodeRef,
    /// Set once the user exports an avatar; switches the hint text.
    pub has_avatar: bool,
}

#[function_component(AvatarPanel)]
pub fn avatar_panel(props: &AvatarPanelProps) -> Html {
    html! {
        <div class="avatar-panel">
            <div class="avatar-viewport-wrap">
                <canvas ref={props.canvas_ref.clone()} class="avatar-viewport" />
                if !props.has_avatar {
                    <p class="avatar-hint">{ "Create an avatar below to see it here." }</p>
                }
            </div>
            <iframe
                ref={props.creator_ref.clone()}
                src={AVATAR_CREATOR_URL}
                class="avatar-creator"
                allow="camera *; microphone *"
                title="Avatar creator"
            />
        </div>
    }
}
