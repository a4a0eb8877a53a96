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

/// Shown when the room service can't be reached or answers with a server
/// error. Distinct from the not-found panel: the room may well exist, we
/// just couldn't ask.
#[function_component(RoomUnreachable)]
pub fn room_unreachable() -> Html {
    html! {
        <div class="room-unreachable">
            <h1>{ "Can't reach the room service" }</h1>
            <p>
                { "Something went wrong talking to the server. Check your connection and reload the page." }
            </p>
            <Link<Route> to={Route::Home} classes="cta-button">
                { "Back to home" }
            </Link<Route>>
        </div>
    }
}
