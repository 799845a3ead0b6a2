// SPDX-License-Identifier: MPL-2.0
//! `lens_playback` is the playback core of an embeddable video player.
//!
//! It owns playback state and coordinates a media element, a permission
//! gate, a preference store and optional fullscreen and picture-in-picture
//! providers. Presentation reads [`player::PresentationSnapshot`]s and sends
//! commands through a [`player::PlayerHandle`].

#![doc(html_root_url = "https://docs.rs/lens_playback/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod paths;
pub mod player;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use player::{spawn_player, Collaborators, PlayerHandle};
