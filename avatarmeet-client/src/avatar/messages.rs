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

//! Parsing and building of avatar-frame `postMessage` payloads.
//!
//! The creation iframe speaks a JSON event protocol: after it announces
//! `v1.frame.ready` we subscribe to the export event, and once the user
//! finishes, `v1.avatar.exported` carries the URL of the generated model.
//! The ready announcement also unlocks the expression channel.

use serde::{Deserialize, Serialize};

/// `source` value the avatar service stamps on its own messages; anything
/// else on the window message bus is unrelated traffic.
const AVATAR_FRAME_SOURCE: &str = "readyplayerme";

const EVENT_FRAME_READY: &str = "v1.frame.ready";
const EVENT_AVATAR_EXPORTED: &str = "v1.avatar.exported";

/// A decoded message from the avatar creation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarFrameEvent {
    /// The frame finished booting; subscriptions may be registered and
    /// expression frames may be sent.
    FrameReady,
    /// The user exported an avatar; `url` points at the glTF asset.
    AvatarExported { url: String },
    /// A well-formed avatar-frame message we don't handle.
    Unhandled,
}

#[derive(Deserialize)]
struct InboundMessage {
    source: Option<String>,
    #[serde(rename = "eventName")]
    event_name: Option<String>,
    data: Option<InboundData>,
}

#[derive(Deserialize)]
struct InboundData {
    url: Option<String>,
}

#[derive(Serialize)]
struct SubscribeMessage {
    target: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "eventName")]
    event_name: &'static str,
}

/// Decode one raw `message` event payload. Returns `None` for anything
/// that is not from the avatar frame (other embeds post on the same
/// window), `Unhandled` for avatar-frame events we ignore.
pub fn parse_frame_event(raw: &str) -> Option<AvatarFrameEvent> {
    let message: InboundMessage = serde_json::from_str(raw).ok()?;
    if message.source.as_deref() != Some(AVATAR_FRAME_SOURCE) {
        return None;
    }
    match message.event_name.as_deref() {
        Some(EVENT_FRAME_READY) => Some(AvatarFrameEvent::FrameReady),
        Some(EVENT_AVATAR_EXPORTED) => {
            let url = message.data.and_then(|d| d.url)?;
            Some(AvatarFrameEvent::AvatarExported { url })
        }
        _ => Some(AvatarFrameEvent::Unhandled),
    }
}

/// The subscription request posted back to the frame after
/// [`AvatarFrameEvent::FrameReady`].
pub fn subscribe_message() -> String {
    // Serializing a struct of statics cannot fail.
    serde_json::to_string(&SubscribeMessage {
        target: AVATAR_FRAME_SOURCE,
        kind: "subscribe",
        event_name: EVENT_AVATAR_EXPORTED,
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_ready_is_recognized() {
        let raw = r#"{"source":"readyplayerme","eventName":"v1.frame.ready"}"#;
        assert_eq!(parse_frame_event(raw), Some(AvatarFrameEvent::FrameReady));
    }

    #[test]
    fn exported_event_carries_the_model_url() {
        let raw = r#"{
            "source": "readyplayerme",
            "eventName": "v1.avatar.exported",
            "data": { "url": "https://models.example/me.glb" }
        }"#;
        assert_eq!(
            parse_frame_event(raw),
            Some(AvatarFrameEvent::AvatarExported {
                url: "https://models.example/me.glb".to_string()
            })
        );
    }

    #[test]
    fn foreign_and_malformed_messages_are_ignored() {
        assert_eq!(parse_frame_event("not json"), None);
        assert_eq!(parse_frame_event(r#"{"source":"other"}"#), None);
        assert_eq!(parse_frame_event(r#"{"hello":1}"#), None);
    }

    #[test]
    fn unknown_avatar_events_are_unhandled_not_errors() {
        let raw = r#"{"source":"readyplayerme","eventName":"v1.user.set"}"#;
        assert_eq!(parse_frame_event(raw), Some(AvatarFrameEvent::Unhandled));
    }

    #[test]
    fn exported_event_without_url_is_dropped() {
        let raw = r#"{"source":"readyplayerme","eventName":"v1.avatar.exported"}"#;
        assert_eq!(parse_frame_event(raw), None);
    }

    #[test]
    fn subscribe_message_targets_the_export_event() {
        let message = subscribe_message();
        assert!(message.contains("\"subscribe\""));
        assert!(message.contains("v1.avatar.exported"));
    }
}
