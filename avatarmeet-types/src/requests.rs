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

//! Request bodies accepted by the room backend.

use serde::{Deserialize, Serialize};

use crate::room_code::RoomCode;

/// Body for `POST /rooms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomRequest {
    /// Identifier of the background scene preset, e.g. `classroom`.
    pub scene: String,
}

/// Body for `POST /rooms/join`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinRoomRequest {
    pub code: RoomCode,
}
