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

//! Room endpoints: create, join, fetch.

use avatarmeet_types::{
    CreateRoomRequest, CreateRoomResponse, JoinRoomRequest, JoinRoomResponse, RoomCode,
    RoomInfoResponse,
};

use crate::error::ApiError;
use crate::{parse_api_response, RoomApiClient};

impl RoomApiClient {
    /// Create a new room using the given background scene preset.
    ///
    /// Calls `POST /rooms`.
    pub async fn create_room(&self, scene: &str) -> Result<CreateRoomResponse, ApiError> {
        let request = CreateRoomRequest {
            scene: scene.to_string(),
        };
        log::info!("Creating room with scene {scene}");
        let response = self.post("/rooms").json(&request).send().await?;
        parse_api_response(response).await
    }

    /// Validate a join code with the backend.
    ///
    /// Calls `POST /rooms/join`. The code has already been uppercased by
    /// [`RoomCode`], so the backend sees the canonical form.
    pub async fn join_room(&self, code: &RoomCode) -> Result<JoinRoomResponse, ApiError> {
        let request = JoinRoomRequest { code: code.clone() };
        log::info!("Joining room {code}");
        let response = self.post("/rooms/join").json(&request).send().await?;
        parse_api_response(response).await
    }

    /// Fetch metadata for a room.
    ///
    /// Calls `GET /rooms/{code}`; a 404 maps to [`ApiError::RoomNotFound`].
    pub async fn get_room(&self, code: &RoomCode) -> Result<RoomInfoResponse, ApiError> {
        let path = format!("/rooms/{code}");
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }
}
