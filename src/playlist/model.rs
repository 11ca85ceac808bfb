use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PlayerError, Result};

/// Which way to move through the playlist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// One playable item with its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub source: PathBuf,
    pub cover: String,
    /// Length reported by the file's tags, when it could be probed.
    pub duration: Option<Duration>,
}

/// A fixed, non-empty list of tracks.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty track list.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at `index`, wrapped into range.
    pub fn track(&self, index: usize) -> &Track {
        &self.tracks[index % self.tracks.len()]
    }

    /// Index one step away from `index` in `direction`, wrapping at both ends.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let len = self.tracks.len();
        let index = index % len;
        match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}
