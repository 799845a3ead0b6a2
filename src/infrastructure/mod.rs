// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`preferences`]: In-memory and TOML-file [`PreferenceStore`]s
//!
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

pub mod preferences;

pub use preferences::{MemoryPreferenceStore, TomlPreferenceStore};
