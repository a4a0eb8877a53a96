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

//! The room view: scene backdrop, self-view, avatar panel, participants.
//!
//! A struct component because it owns long-lived session objects (the
//! capture session, the avatar viewport, the expression publisher) whose
//! lifetimes must track mount/unmount exactly, not hook re-runs.

use std::cell::RefCell;
use std::rc::Rc;

use avatarmeet_client::avatar::{parse_frame_event, subscribe_message, AvatarFrameEvent};
use avatarmeet_client::{
    AvatarViewport, CaptureError, CaptureSession, ExpressionFrame, ExpressionPublisher,
};
use avatarmeet_room_client::{ApiError, RoomApiClient};
use avatarmeet_types::{RoomCode, RoomInfoResponse};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlIFrameElement, HtmlVideoElement, MessageEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::avatar_panel::AvatarPanel;
use crate::components::room_not_found::RoomNotFound;
use crate::components::room_unreachable::RoomUnreachable;
use crate::components::scene_embed::SceneEmbed;
use crate::components::self_view::SelfView;
use crate::constants::{app_config, ROOM_SCENE_URL};
use crate::routing::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct RoomPageProps {
    pub code: String,
}

enum RoomState {
    Loading,
    Loaded(RoomInfoResponse),
    NotFound,
    /// The backend couldn't be asked: network failure or a 5xx. The room
    /// may exist, so this renders differently from `NotFound`.
    Unreachable,
}

pub enum Msg {
    RoomFetched(Result<RoomInfoResponse, ApiError>),
    CaptureStarted,
    MediaError(CaptureError),
    Level(f32),
    ToggleMute,
    ToggleCamera,
    FrameEvent(AvatarFrameEvent),
    Leave,
}

pub struct RoomPage {
    /// Display form of the room code, already uppercased. `None` when the
    /// path segment wasn't a valid code at all.
    code: Option<RoomCode>,
    room: RoomState,

    capture: CaptureSession,
    viewport: Option<AvatarViewport>,
    publisher: Rc<RefCell<ExpressionPublisher>>,
    media_started: bool,

    level: f32,
    muted: bool,
    camera_off: bool,
    media_error: Option<CaptureError>,
    avatar_url: Option<String>,

    video_ref: NodeRef,
    canvas_ref: NodeRef,
    creator_ref: NodeRef,
    message_listener: Option<Closure<dyn FnMut(MessageEvent)>>,
}

impl Component for RoomPage {
    type Message = Msg;
    type Properties = RoomPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let code = RoomCode::parse(&ctx.props().code).ok();
        let room = match &code {
            Some(code) => {
                fetch_room(ctx, code.clone());
                RoomState::Loading
            }
            // A path segment that can't be a code can't name a room.
            None => RoomState::NotFound,
        };

        let capture = CaptureSession::new();
        {
            let link = ctx.link().clone();
            capture.set_on_level(Rc::new(move |level| link.send_message(Msg::Level(level))));
        }
        {
            let link = ctx.link().clone();
            capture.set_on_started(Rc::new(move || link.send_message(Msg::CaptureStarted)));
        }
        {
            let link = ctx.link().clone();
            capture.set_on_error(Rc::new(move |e| link.send_message(Msg::MediaError(e))));
        }

        let mut page = Self {
            code,
            room,
            capture,
            viewport: None,
            publisher: Rc::new(RefCell::new(ExpressionPublisher::new())),
            media_started: false,
            level: 0.0,
            muted: false,
            camera_off: false,
            media_error: None,
            avatar_url: None,
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
            creator_ref: NodeRef::default(),
            message_listener: None,
        };
        page.listen_for_frame_events(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RoomFetched(Ok(info)) => {
                self.room = RoomState::Loaded(info);
                true
            }
            Msg::RoomFetched(Err(e)) => {
                log::warn!("room fetch failed: {e}");
                self.room = match e {
                    ApiError::RoomNotFound | ApiError::InvalidCode(_) => RoomState::NotFound,
                    ApiError::Server { .. } | ApiError::Network(_) => RoomState::Unreachable,
                };
                true
            }
            Msg::CaptureStarted => {
                self.media_error = None;
                true
            }
            Msg::MediaError(e) => {
                self.media_error = Some(e);
                true
            }
            Msg::Level(level) => {
                self.level = level;
                // Same signal drives the meter and the avatar's mouth.
                self.publisher
                    .borrow_mut()
                    .publish(ExpressionFrame::from_level(level));
                true
            }
            Msg::ToggleMute => {
                if let Some(muted) = self.capture.toggle_mute() {
                    self.muted = muted;
                }
                true
            }
            Msg::ToggleCamera => {
                if let Some(camera_off) = self.capture.toggle_camera() {
                    self.camera_off = camera_off;
                }
                true
            }
            Msg::FrameEvent(AvatarFrameEvent::FrameReady) => {
                self.publisher.borrow_mut().mark_ready();
                self.subscribe_to_exports();
                false
            }
            Msg::FrameEvent(AvatarFrameEvent::AvatarExported { url }) => {
                log::info!("avatar exported: {url}");
                if let Some(viewport) = &mut self.viewport {
                    viewport.set_asset(&url);
                }
                self.avatar_url = Some(url);
                true
            }
            Msg::FrameEvent(AvatarFrameEvent::Unhandled) => false,
            Msg::Leave => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The media elements exist only once the room view is up; start
        // the sessions exactly once, on the first render that has them.
        if self.media_started || !matches!(self.room, RoomState::Loaded(_)) {
            return;
        }
        let (Some(video), Some(canvas)) = (
            self.video_ref.cast::<HtmlVideoElement>(),
            self.canvas_ref.cast::<HtmlCanvasElement>(),
        ) else {
            return;
        };
        self.media_started = true;

        self.capture.start(video);

        match AvatarViewport::mount(canvas) {
            Ok(mut viewport) => {
                viewport.set_on_asset_error(Rc::new(|e| {
                    // The previous avatar (or the empty stage) stays up.
                    log::error!("avatar asset failed to load: {e}");
                }));
                self.viewport = Some(viewport);
            }
            Err(e) => log::error!("avatar viewport unavailable: {e}"),
        }

        if let Some(iframe) = self.creator_ref.cast::<HtmlIFrameElement>() {
            self.publisher.borrow_mut().attach(&iframe);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.capture.stop();
        if let Some(mut viewport) = self.viewport.take() {
            viewport.unmount();
        }
        if let Some(listener) = self.message_listener.take() {
            let _ = gloo_utils::window().remove_event_listener_with_callback(
                "message",
                listener.as_ref().unchecked_ref(),
            );
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let code_text = self
            .code
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_else(|| ctx.props().code.clone());

        let body = match &self.room {
            RoomState::Loading => html! {
                <div class="room-loading">{ "Joining room..." }</div>
            },
            RoomState::NotFound => html! {
                <RoomNotFound code={code_text.clone()} />
            },
            RoomState::Unreachable => html! {
                <RoomUnreachable />
            },
            RoomState::Loaded(info) => self.view_room(ctx, info),
        };

        html! {
            <section class="room-container">
                <SceneEmbed url={ROOM_SCENE_URL.to_string()} />
                <div class="room-overlay" />
                <div class="room-content">
                    <div class="room-header">
                        <div>
                            <h1 class="room-title">{ format!("Room {code_text}") }</h1>
                            <p class="room-scene">
                                { match &self.room {
                                    RoomState::Loaded(info) => format!("Scene: {}", info.scene),
                                    _ => "Scene: loading...".to_string(),
                                } }
                            </p>
                        </div>
                        <button
                            class="control-button"
                            onclick={ctx.link().callback(|_| Msg::Leave)}
                        >
                            { "Leave" }
                        </button>
                    </div>
                    { body }
                </div>
            </section>
        }
    }
}

impl RoomPage {
    fn view_room(&self, ctx: &Context<Self>, _info: &RoomInfoResponse) -> Html {
        html! {
            <div class="room-grid">
                <SelfView
                    video_ref={self.video_ref.clone()}
                    level={self.level}
                    muted={self.muted}
                    camera_off={self.camera_off}
                    media_error={self.media_error.clone()}
                    on_toggle_mute={ctx.link().callback(|_| Msg::ToggleMute)}
                    on_toggle_camera={ctx.link().callback(|_| Msg::ToggleCamera)}
                />
                <div class="room-side">
                    <AvatarPanel
                        canvas_ref={self.canvas_ref.clone()}
                        creator_ref={self.creator_ref.clone()}
                        has_avatar={self.avatar_url.is_some()}
                    />
                    <div class="participants-card">
                        <div class="participants-header">{ "Participants" }</div>
                        <div class="participants-row">
                            <span>{ "You" }</span>
                            <span class="participants-status">{ "Connected" }</span>
                        </div>
                    </div>
                </div>
            </div>
        }
    }

    /// Route `message` events from the creation iframe into the update
    /// loop. Foreign traffic on the window bus parses to `None` and never
    /// produces a message.
    fn listen_for_frame_events(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let listener = Closure::new(move |event: MessageEvent| {
            let Some(raw) = event.data().as_string() else {
                return;
            };
            if let Some(frame_event) = parse_frame_event(&raw) {
                link.send_message(Msg::FrameEvent(frame_event));
            }
        });
        if let Err(e) = gloo_utils::window()
            .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for avatar frame events: {e:?}");
        }
        self.message_listener = Some(listener);
    }

    /// Answer the frame's readiness announcement with a subscription to
    /// the avatar-exported event.
    fn subscribe_to_exports(&self) {
        let Some(iframe) = self.creator_ref.cast::<HtmlIFrameElement>() else {
            return;
        };
        let Some(target) = iframe.content_window() else {
            return;
        };
        if let Err(e) =
            target.post_message(&wasm_bindgen::JsValue::from_str(&subscribe_message()), "*")
        {
            log::warn!("export subscription failed: {e:?}");
        }
    }
}

fn fetch_room(ctx: &Context<RoomPage>, code: RoomCode) {
    let link = ctx.link().clone();
    let Ok(config) = app_config() else {
        link.send_message(Msg::RoomFetched(Err(ApiError::RoomNotFound)));
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let client = RoomApiClient::new(config.api_base_url);
        link.send_message(Msg::RoomFetched(client.get_room(&code).await));
    });
}
