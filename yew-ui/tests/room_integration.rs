// Copyright 2025 AvatarMeet Contributors
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the room page's failure paths. The happy path
// needs a live backend and real devices; what we can pin down here is
// that a bad code lands on the not-found panel (with a way back home),
// that a dead backend lands on the unreachable panel rather than
// claiming the room doesn't exist, and that codes are displayed in
// their normalized uppercase form.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_app_config, remove_app_config};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use avatarmeet_ui::pages::room::RoomPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    code: String,
}

#[function_component(RoomTestWrapper)]
fn room_test_wrapper(props: &WrapperProps) -> Html {
    html! {
        <BrowserRouter>
            <RoomPage code={props.code.clone()} />
        </BrowserRouter>
    }
}

#[wasm_bindgen_test]
async fn invalid_code_shows_the_not_found_panel() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<RoomTestWrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            code: "???".to_string(),
        },
    )
    .render();
    sleep(Duration::ZERO).await;

    assert!(
        mount.query_selector(".room-not-found").unwrap().is_some(),
        "not-found panel missing"
    );
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Room not found"), "heading missing");
    assert!(text.contains("Back to home"), "way back home missing");

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn unreachable_backend_shows_the_service_panel() {
    // apiBaseUrl points at a host that answers nothing; the fetch fails
    // with a network error, which must read as "couldn't ask", not as
    // "room doesn't exist".
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<RoomTestWrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            code: "ABC123".to_string(),
        },
    )
    .render();

    // Give the failing fetch a moment to resolve.
    for _ in 0..50 {
        sleep(Duration::from_millis(100)).await;
        if mount
            .query_selector(".room-unreachable")
            .unwrap()
            .is_some()
        {
            break;
        }
    }
    assert!(
        mount.query_selector(".room-unreachable").unwrap().is_some(),
        "unreachable panel should appear once the fetch fails"
    );
    assert!(
        mount.query_selector(".room-not-found").unwrap().is_none(),
        "a network failure must not claim the room doesn't exist"
    );
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Back to home"), "way back home missing");

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn room_codes_are_displayed_uppercase() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<RoomTestWrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            code: "abc123".to_string(),
        },
    )
    .render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("Room ABC123"),
        "lowercase path codes should display normalized"
    );

    cleanup(&mount);
    remove_app_config();
}
