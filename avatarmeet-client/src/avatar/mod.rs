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

//! Message protocol of the third-party avatar creation frame.

mod messages;

pub use messages::{parse_frame_event, subscribe_message, AvatarFrameEvent};
