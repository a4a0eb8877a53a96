// Copyright 2025 AvatarMeet Contributors
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for avatarmeet-ui component tests.
//
// Provides mount/cleanup helpers and runtime-config injection so that
// individual test files stay focused on assertions rather than
// boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not
// every function is used in every compilation unit.
#![allow(dead_code)]

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Inject a `window.__APP_CONFIG` object with all required
/// `RuntimeConfig` fields. Call this before rendering any component that
/// reads the runtime config (e.g. `Home`, `RoomPage`, `AppRoot`).
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &"apiBaseUrl".into(),
        &"http://test:8080".into(),
    )
    .unwrap();
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
