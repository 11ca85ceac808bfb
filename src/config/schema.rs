use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/jukebar/config.toml` or `~/.config/jukebar/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `JUKEBAR__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playlist: PlaylistSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// How often the audio thread reports playback position (milliseconds).
    pub tick_ms: u64,
    /// Output volume, from 0.0 (silent) to 1.0.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Resume a paused track where it stopped instead of reloading its source.
    pub resume_in_place: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            volume: 1.0,
            quit_fade_out_ms: 500,
            resume_in_place: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Reveal the player surface right away instead of waiting for a play trigger.
    pub show_on_start: bool,
    /// How long a notice stays on screen (milliseconds).
    pub notice_timeout_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " New music out now. Press enter to listen ".to_string(),
            show_on_start: false,
            notice_timeout_ms: 5000,
        }
    }
}

/// One configured playlist entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrackEntry {
    pub title: String,
    pub artist: String,
    /// Path to the audio file. Relative paths resolve against the config file's directory.
    pub source: PathBuf,
    #[serde(default)]
    pub cover: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Fixed list of tracks. Ignored when `directory` is set.
    pub tracks: Vec<TrackEntry>,
    /// Build the playlist by scanning this directory instead.
    pub directory: Option<PathBuf>,
    /// File extensions to treat as audio when scanning (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        let demo = |n: u32| TrackEntry {
            title: format!("Track Title {n}"),
            artist: "Artist Name".to_string(),
            source: PathBuf::from(format!("assets/music/track{n}.mp3")),
            cover: format!("assets/track{n}.jpg"),
        };

        Self {
            tracks: vec![demo(1), demo(2), demo(3)],
            directory: None,
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `jukebar=debug`.
    pub level: String,
    /// Log file. Logging stays off when unset since the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
