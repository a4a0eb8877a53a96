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

const FEATURES: &[(&str, &str)] = &[
    (
        "Room Code Access",
        "Jump in with a simple room code. No signup required for guests.",
    ),
    (
        "Multi-user Classrooms",
        "Collaborate with classmates and instructors in shared spaces.",
    ),
    (
        "Real-time Voice Chat",
        "Crystal clear voice powered by WebRTC, optimized for groups.",
    ),
    (
        "Text Chat",
        "Keep side conversations flowing with built-in room chat.",
    ),
    (
        "3D Avatars",
        "Live lip sync and expressive gestures bring your persona to life.",
    ),
    (
        "Immersive Backgrounds",
        "Switch scenes: Classroom, Space Lab, Nature — fully 3D and dynamic.",
    ),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "AR/VR Ready (WebXR)",
        "Step into rooms using AR on mobile or VR headsets with WebXR support.",
    ),
    (
        "WebRTC Core",
        "Low-latency media for voice and future video streams, designed for classrooms.",
    ),
    (
        "Scene Presets",
        "Pick from Classroom, Space Lab, or Nature backdrops — or bring your own.",
    ),
];

/// Feature grid plus the highlight cards below it.
#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features-section">
            <h2 class="section-title">{ "Built for immersive learning" }</h2>
            <p class="section-subtitle">
                { "Expressive avatars, spatial presence, and realtime collaboration – all in your browser." }
            </p>
            <div class="features-grid">
                { for FEATURES.iter().map(|(title, desc)| html! {
                    <div class="feature-card" key={*title}>
                        <h3>{ *title }</h3>
                        <p>{ *desc }</p>
                    </div>
                }) }
            </div>
            <div class="highlights-grid">
                { for HIGHLIGHTS.iter().map(|(title, desc)| html! {
                    <div class="highlight-card" key={*title}>
                        <h4>{ *title }</h4>
                        <p>{ *desc }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
