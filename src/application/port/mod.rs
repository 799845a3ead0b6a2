// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`media`]: The media element the core drives
//! - [`permission`]: "May I start playing" gate collaborator
//! - [`capability`]: Fullscreen and picture-in-picture providers
//! - [`storage`]: Key/value preference persistence
//!
//! # Design Notes
//!
//! - Traits use domain types only
//! - Traits are `Send` so the core can live in a spawned task
//! - Commands to collaborators are fire-and-forget; collaborators report
//!   outcomes back as events

pub mod capability;
pub mod media;
pub mod permission;
pub mod storage;

pub use capability::{DisplayCapability, Unsupported};
pub use media::MediaElement;
pub use permission::{AlwaysGrant, PermissionFuture, PermissionProvider};
pub use storage::PreferenceStore;
