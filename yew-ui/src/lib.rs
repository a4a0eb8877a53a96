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

//! avatarmeet-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`)
//! can import pages and components. The binary entry-point lives in
//! `main.rs`.

pub mod components;
pub mod constants;
pub mod pages;
pub mod routing;

use components::config_error::ConfigError;
use pages::home::Home;
use pages::room::RoomPage;
use routing::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Room { code } => html! { <RoomPage code={code} /> },
        // Unmatched paths fall back to the landing page so stale links
        // don't dead-end.
        Route::NotFound => html! { <Home /> },
    }
}

/// Application root: checks the runtime config, then mounts the router.
#[function_component(AppRoot)]
pub fn app_root() -> Html {
    if let Err(reason) = constants::app_config() {
        return html! { <ConfigError reason={reason} /> };
    }
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
