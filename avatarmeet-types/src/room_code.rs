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

//! Validated, case-normalized room codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A short identifier addressing a room, e.g. `ABC123`.
///
/// Codes accept letters, digits, `_` and `-`. They are stored uppercase so
/// that `abc123` and `ABC123` address the same room, both in the URL bar
/// and in backend lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomCodeError {
    #[error("room code is empty")]
    Empty,

    #[error("room code contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

impl RoomCode {
    /// Validate `input` and normalize it to uppercase.
    ///
    /// Leading and trailing whitespace is tolerated since codes are usually
    /// pasted into an input field.
    pub fn parse(input: &str) -> Result<Self, RoomCodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RoomCodeError::Empty);
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(RoomCodeError::InvalidCharacter(bad));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoomCode {
    type Err = RoomCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoomCode {
    type Error = RoomCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_input_is_normalized_to_uppercase() {
        let code = RoomCode::parse("abc123").unwrap();
        assert_eq!(code.as_str(), "ABC123");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let code = RoomCode::parse("  xy-9_z \n").unwrap();
        assert_eq!(code.as_str(), "XY-9_Z");
    }

    #[test]
    fn empty_and_blank_input_is_rejected() {
        assert_eq!(RoomCode::parse(""), Err(RoomCodeError::Empty));
        assert_eq!(RoomCode::parse("   "), Err(RoomCodeError::Empty));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        assert_eq!(
            RoomCode::parse("abc 123"),
            Err(RoomCodeError::InvalidCharacter(' '))
        );
        assert_eq!(
            RoomCode::parse("abc/123"),
            Err(RoomCodeError::InvalidCharacter('/'))
        );
    }

    #[test]
    fn serde_round_trip_keeps_normalized_form() {
        let code: RoomCode = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(code.as_str(), "ABC123");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ABC123\"");
    }

    #[test]
    fn serde_rejects_invalid_codes() {
        assert!(serde_json::from_str::<RoomCode>("\"!!\"").is_err());
    }
}
