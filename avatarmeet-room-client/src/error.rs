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

//! Error types for the room API client.

use avatarmeet_types::RoomCodeError;
use thiserror::Error;

/// Errors returned by [`RoomApiClient`](crate::RoomApiClient) methods.
///
/// Every variant has a user-presentable `Display` string; the UI shows them
/// inline rather than letting them terminate a view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The room does not exist, or a join/fetch returned 404.
    #[error("Room not found. Check your code and try again.")]
    RoomNotFound,

    /// The submitted room code failed local validation.
    #[error("Invalid room code: {0}")]
    InvalidCode(#[from] RoomCodeError),

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// A network or transport error (backend unreachable, DNS, CORS, ...).
    #[error("Could not reach the room service. Please try again.")]
    Network(#[from] reqwest::Error),
}
