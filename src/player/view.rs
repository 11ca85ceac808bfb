//! Read-only projection of the player state for the rendering surface.

use crate::playlist::Playlist;

use super::format::format_duration;
use super::state::{Notice, PlayerState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

impl PlayIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

/// Everything the surface writes, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub visible: bool,
    pub title: String,
    pub artist: String,
    pub cover: String,
    /// Progress bar width, 0.0 to 100.0.
    pub percent: f64,
    pub elapsed: String,
    pub total: String,
    /// The button shows the action it performs: `Play` while paused.
    pub icon: PlayIcon,
    pub current: usize,
    pub playing: bool,
    pub notice: Option<Notice>,
}

impl PlayerView {
    pub fn project(state: &PlayerState, playlist: &Playlist) -> Self {
        let track = playlist.track(state.current);
        Self {
            visible: state.is_visible(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover: track.cover.clone(),
            percent: state.progress.percent,
            elapsed: format_duration(state.progress.position),
            total: format_duration(state.progress.duration),
            icon: if state.playing {
                PlayIcon::Pause
            } else {
                PlayIcon::Play
            },
            current: state.current,
            playing: state.playing,
            notice: state.notice.clone(),
        }
    }
}
