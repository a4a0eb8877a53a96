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
pub struct ConfigErrorProps {
    pub reason: String,
}

/// Full-page error shown instead of the app when the runtime config is
/// missing or incomplete. Deployment problem, not a user problem.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <h1 class="error-title">{ "Configuration error" }</h1>
            <p class="error-message">{ props.reason.clone() }</p>
        </div>
    }
}
