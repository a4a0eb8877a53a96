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

//! Runtime configuration and app-wide constants.
//!
//! Configuration is injected at page load via a `window.__APP_CONFIG`
//! object (written by the hosting page, or by the test harness), so the
//! same build runs against any backend without recompiling.

use wasm_bindgen::JsValue;

/// Scene preset used when creating a room from the hero section.
pub const DEFAULT_SCENE: &str = "classroom";

/// Full-page 3D scene embedded behind the hero section.
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/7m4PRZ7kg6K1jPfF/scene.splinecode";

/// 3D backdrop behind the room view. One consistent scene for now; the
/// room's `scene` field selects presets once more than one exists.
pub const ROOM_SCENE_URL: &str = "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode";

/// Avatar creation frame. `frameApi` enables the postMessage event
/// protocol we subscribe to.
pub const AVATAR_CREATOR_URL: &str = "https://demo.readyplayer.me/avatar?frameApi";

/// Everything the app reads from `window.__APP_CONFIG`.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Base URL of the room backend, no trailing slash.
    pub api_base_url: String,
}

/// Read the runtime config from `window.__APP_CONFIG`.
///
/// Returns a human-readable reason when the config object or a required
/// key is missing; the caller renders it instead of the app.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let window = gloo_utils::window();
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str("__APP_CONFIG"))
        .map_err(|_| "window.__APP_CONFIG is not readable".to_string())?;
    if raw.is_undefined() || raw.is_null() {
        return Err("window.__APP_CONFIG is missing; the hosting page must inject it".to_string());
    }
    let api_base_url = string_key(&raw, "apiBaseUrl")?;
    Ok(RuntimeConfig { api_base_url })
}

fn string_key(config: &JsValue, key: &str) -> Result<String, String> {
    js_sys::Reflect::get(config, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("window.__APP_CONFIG.{key} is missing or empty"))
}
