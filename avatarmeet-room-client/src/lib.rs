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

//! Cross-platform REST client for the AvatarMeet room backend.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use avatarmeet_room_client::RoomApiClient;
//! use avatarmeet_types::RoomCode;
//!
//! # async fn example() -> Result<(), avatarmeet_room_client::ApiError> {
//! let client = RoomApiClient::new("http://localhost:8080");
//!
//! let created = client.create_room("classroom").await?;
//! let code = RoomCode::parse("abc123")?;
//! let info = client.get_room(&code).await?;
//! println!("room {} uses scene {}", code, info.scene);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod rooms;

pub use error::ApiError;
pub use avatarmeet_types;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// REST client for the room backend.
///
/// Cheap to clone; all clones share one [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct RoomApiClient {
    client: Client,
    base_url: String,
}

impl RoomApiClient {
    /// Create a client for the backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }
}

/// Map a backend response to a typed result.
///
/// 404 becomes [`ApiError::RoomNotFound`]; any other non-success status is
/// surfaced with its body for logging.
pub(crate) async fn parse_api_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::RoomNotFound);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_the_base_url() {
        let client = RoomApiClient::new("http://backend:8080//");
        assert_eq!(client.base_url(), "http://backend:8080");
    }
}
