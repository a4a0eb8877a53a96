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

pub mod avatar_panel;
pub mod config_error;
pub mod cta_footer;
pub mod features;
pub mod hero;
pub mod media_banner;
pub mod room_not_found;
pub mod room_unreachable;
pub mod scene_embed;
pub mod self_view;
pub mod tech_stack;
