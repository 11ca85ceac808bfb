//! Player session state: current track, play/pause, visibility, progress
//! display and the active notice.

use std::time::Duration;

/// Whether the player surface is on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Coarse player state as seen from the outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Paused,
    Playing,
}

/// What the progress indicator currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progress {
    /// Width of the progress bar, 0.0 to 100.0.
    pub percent: f64,
    pub position: Option<Duration>,
    /// `None` until the source reports a usable length.
    pub duration: Option<Duration>,
}

impl Progress {
    /// Fresh progress for a newly bound track.
    pub fn starting(duration: Option<Duration>) -> Self {
        Self {
            percent: 0.0,
            position: Some(Duration::ZERO),
            duration,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    /// Index of the current track; always within the playlist.
    pub current: usize,
    pub playing: bool,
    pub visibility: Visibility,
    /// Track whose source is bound to the playback primitive, if any.
    pub bound: Option<usize>,
    pub progress: Progress,
    pub notice: Option<Notice>,
}

impl PlayerState {
    pub fn phase(&self) -> Phase {
        match (self.visibility, self.playing) {
            (Visibility::Hidden, _) => Phase::Hidden,
            (Visibility::Visible, false) => Phase::Paused,
            (Visibility::Visible, true) => Phase::Playing,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
