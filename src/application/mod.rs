// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator interfaces.
//!
//! - [`port`]: Trait definitions the player core consumes
//!
//! # Dependency Rule
//!
//! - Ports use domain types only
//! - Infrastructure adapters implement ports
//! - The player core depends on ports, never on adapters
//!
//! # Example
//!
//! ```ignore
//! use lens_playback::application::port::MediaElement;
//!
//! struct HtmlVideo { /* ... */ }
//! impl MediaElement for HtmlVideo { /* ... */ }
//! ```

pub mod port;
