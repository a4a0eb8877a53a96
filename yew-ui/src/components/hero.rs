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

//! Landing hero: 3D scene backdrop plus the create/join entry points.

use avatarmeet_room_client::RoomApiClient;
use avatarmeet_types::RoomCode;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scene_embed::SceneEmbed;
use crate::constants::{app_config, DEFAULT_SCENE, HERO_SCENE_URL};
use crate::routing::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator().expect("Navigator context missing");
    let show_join = use_state(|| false);
    let code_value = use_state(String::new);
    let error_state = use_state(|| None as Option<String>);

    let on_create = {
        let navigator = navigator.clone();
        let error_state = error_state.clone();
        Callback::from(move |_: MouseEvent| {
            let navigator = navigator.clone();
            let error_state = error_state.clone();
            let Ok(config) = app_config() else {
                error_state.set(Some("Backend is not configured.".to_string()));
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                let client = RoomApiClient::new(config.api_base_url);
                match client.create_room(DEFAULT_SCENE).await {
                    Ok(created) => {
                        navigator.push(&Route::Room {
                            code: created.code.to_string(),
                        });
                    }
                    Err(e) => {
                        log::error!("room creation failed: {e}");
                        error_state.set(Some(
                            "Could not create room. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let on_show_join = {
        let show_join = show_join.clone();
        Callback::from(move |_: MouseEvent| show_join.set(true))
    };

    let on_hide_join = {
        let show_join = show_join.clone();
        let error_state = error_state.clone();
        Callback::from(move |_: MouseEvent| {
            show_join.set(false);
            error_state.set(None);
        })
    };

    let on_code_input = {
        let code_value = code_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code_value.set(input.value());
        })
    };

    let on_join = {
        let navigator = navigator.clone();
        let code_value = code_value.clone();
        let error_state = error_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Normalizes case and whitespace, so "abc123" joins ABC123.
            let code = match RoomCode::parse(&code_value) {
                Ok(code) => code,
                Err(avatarmeet_types::RoomCodeError::Empty) => return,
                Err(_) => {
                    error_state.set(Some(
                        "Room codes use letters, numbers, - and _ only.".to_string(),
                    ));
                    return;
                }
            };
            let Ok(config) = app_config() else {
                error_state.set(Some("Backend is not configured.".to_string()));
                return;
            };
            let navigator = navigator.clone();
            let error_state = error_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = RoomApiClient::new(config.api_base_url);
                match client.join_room(&code).await {
                    Ok(joined) => {
                        navigator.push(&Route::Room {
                            code: joined.code.to_string(),
                        });
                    }
                    Err(e) => {
                        log::warn!("join failed for {code}: {e}");
                        error_state.set(Some(
                            "Room not found. Check your code and try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let error_html = if let Some(err) = &*error_state {
        html! { <p class="error">{ err }</p> }
    } else {
        html! {}
    };

    html! {
        <section class="hero-container">
            <SceneEmbed url={HERO_SCENE_URL.to_string()} />
            <div class="hero-overlay" />
            <div class="hero-content">
                <div class="hero-badge">{ "Built Free for Testing" }</div>
                <h1 class="hero-title">{ "Bring your avatar to life in a 3D classroom." }</h1>
                <p class="hero-subtitle">
                    { "Join rooms, talk, and express yourself — as your avatar." }
                </p>
                <div class="hero-actions">
                    <button class="cta-button" onclick={on_create}>{ "Create Room" }</button>
                    <button class="cta-button outline" onclick={on_show_join}>{ "Join with Code" }</button>
                </div>
                <p class="hero-hints">{ "AR/VR ready • WebRTC voice + text • Multi-user rooms" }</p>
            </div>

            if *show_join {
                <div class="join-dialog-backdrop">
                    <div class="join-dialog">
                        <h3>{ "Join with Code" }</h3>
                        <p>{ "Enter a room code to jump into your 3D classroom." }</p>
                        <form onsubmit={on_join} class="join-form">
                            <input
                                id="room-code"
                                class="join-input"
                                placeholder="e.g. ABC123"
                                oninput={on_code_input}
                                value={(*code_value).clone()}
                            />
                            <button class="cta-button" type="submit">{ "Join" }</button>
                        </form>
                        { error_html }
                        <button class="link-button" onclick={on_hide_join}>{ "Cancel" }</button>
                    </div>
                </div>
            }
        </section>
    }
}
