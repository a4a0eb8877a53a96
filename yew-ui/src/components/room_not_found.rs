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
use yew_router::prelude::*;

use crate::routing::Route;

#[derive(Properties, Debug, PartialEq)]
pub struct RoomNotFoundProps {
    pub code: String,
}

/// Shown in place of the room view when the code doesn't resolve. The
/// page keeps running; the only way out offered is back home.
#[function_component(RoomNotFound)]
pub fn room_not_found(props: &RoomNotFoundProps) -> Html {
    html! {
        <div class="room-not-found">
            <h1>{ "Room not found" }</h1>
            <p>
                { format!("No room answers to the code {}. It may have expired, or the code was mistyped.", props.code) }
            </p>
            <Link<Route> to={Route::Home} classes="cta-button">
                { "Back to home" }
            </Link<Route>>
        </div>
    }
}
