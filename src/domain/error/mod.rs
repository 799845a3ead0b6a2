// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These are values carried through playback state and notifications, not
//! failures of a Rust operation.

use std::fmt;

/// Opaque error payload reported by the media element.
///
/// The core only stops playback when it sees one; interpreting the code and
/// message is left to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaError {
    /// Collaborator-specific error code, if any.
    pub code: Option<u32>,
    /// Human-readable description.
    pub message: String,
}

impl MediaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "Media error {}: {}", code, self.message),
            None => write!(f, "Media error: {}", self.message),
        }
    }
}

impl std::error::Error for MediaError {}

/// The permission collaborator refused (or cancelled) a play request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionDenied {
    pub reason: Option<String>,
}

impl PermissionDenied {
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "Playback permission denied: {}", reason),
            None => write!(f, "Playback permission denied"),
        }
    }
}

impl std::error::Error for PermissionDenied {}
