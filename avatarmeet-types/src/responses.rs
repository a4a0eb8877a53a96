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

//! Response bodies returned by the room backend.

use serde::{Deserialize, Serialize};

use crate::room_code::RoomCode;

/// Response of `POST /rooms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomResponse {
    pub code: RoomCode,
}

/// Response of `POST /rooms/join`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinRoomResponse {
    pub code: RoomCode,
}

/// Response of `GET /rooms/{code}`.
///
/// A room is immutable from the client's point of view once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomInfoResponse {
    /// Identifier of the background scene preset for this room.
    pub scene: String,
}
