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

//! Shared types for the AvatarMeet room API.
//!
//! The room backend is an external service; these types mirror its JSON
//! wire format so that the REST client and the UI agree on one schema.

pub mod requests;
pub mod responses;
pub mod room_code;

pub use requests::{CreateRoomRequest, JoinRoomRequest};
pub use responses::{CreateRoomResponse, JoinRoomResponse, RoomInfoResponse};
pub use room_code::{RoomCode, RoomCodeError};
