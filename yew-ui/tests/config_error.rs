// Copyright 2025 AvatarMeet Contributors
// Licensed under MIT OR Apache-2.0
//
// The app must refuse to boot into a broken state when the hosting page
// forgot to inject window.__APP_CONFIG, and must say so on screen.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_app_config, remove_app_config};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use avatarmeet_ui::AppRoot;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn missing_config_renders_the_error_screen() {
    remove_app_config();

    let mount = create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(
        mount.query_selector(".error-container").unwrap().is_some(),
        "config error screen missing"
    );
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("__APP_CONFIG"), "reason should name the object");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn present_config_boots_the_router() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(
        mount.query_selector(".error-container").unwrap().is_none(),
        "no error screen expected with a complete config"
    );

    cleanup(&mount);
    remove_app_config();
}
