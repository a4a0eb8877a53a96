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

/// Closing call-to-action card and the page footer.
#[function_component(CtaFooter)]
pub fn cta_footer() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-card">
                <div>
                    <h3>{ "Start your 3D classroom now" }</h3>
                    <p>{ "Join free — no downloads needed" }</p>
                    <span class="cta-badge">{ "Built Free for Testing" }</span>
                </div>
                <div class="cta-actions">
                    <a href="#" class="cta-button">{ "Get Started" }</a>
                    <a href="#" class="cta-button outline">{ "Join Beta" }</a>
                </div>
            </div>
            <footer class="site-footer">
                <div>{ "© 2025 AvatarMeet — Metaverse for Students" }</div>
                <div class="footer-links">
                    <a href="#">{ "GitHub" }</a>
                    <a href="#">{ "Docs" }</a>
                    <a href="#">{ "Join Beta" }</a>
                </div>
            </footer>
        </section>
    }
}
