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

//! Landing page: hero, features, tech stack, and the closing CTA.

use yew::prelude::*;

use crate::components::cta_footer::CtaFooter;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::tech_stack::TechStack;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <Hero />
            <Features />
            <TechStack />
            <CtaFooter />
        </div>
    }
}
