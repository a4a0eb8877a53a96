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

const STACK: &[&str] = &[
    "Rust + WebAssembly frontend",
    "Yew component framework",
    "three-d rendering engine",
    "Ready Player Me avatars",
    "WebRTC voice (coming soon)",
];

/// Short strip of the technologies behind the product.
#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    html! {
        <section class="tech-section">
            <h2 class="section-title">{ "Tech that powers AvatarMeet" }</h2>
            <p class="section-subtitle">
                { "A modern stack focused on realtime performance and immersive 3D experiences." }
            </p>
            <div class="tech-grid">
                { for STACK.iter().map(|label| html! {
                    <div class="tech-card" key={*label}>{ *label }</div>
                }) }
            </div>
            <div class="tech-links">
                <a href="#" class="cta-button outline">{ "GitHub" }</a>
                <a href="#" class="cta-button">{ "Docs" }</a>
            </div>
        </section>
    }
}
