//! Error type shared by the playlist loader, the audio engine and startup.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("the playlist has no tracks")]
    EmptyPlaylist,

    #[error("failed to load settings: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to serialize settings: {0}")]
    SerializeSettings(#[from] toml::ser::Error),

    #[error("failed to open {path:?}: {source}")]
    OpenSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    OutputDevice(#[from] rodio::StreamError),

    #[error("the audio engine is not running")]
    EngineGone,

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = PlayerError> = std::result::Result<T, E>;
