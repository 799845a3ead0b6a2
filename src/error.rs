// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-level error type.
///
/// Playback failures (permission denial, media errors) are not represented
/// here: they are part of the playback state, not failures of an operation.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    /// The player runtime has stopped and no longer accepts input.
    #[error("Player runtime has shut down")]
    Shutdown,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
