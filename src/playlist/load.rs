use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{PlaylistSettings, TrackEntry};
use crate::error::Result;

use super::model::{Playlist, Track};

const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

/// Build the playlist from settings.
///
/// A configured `directory` wins over the fixed `tracks` list. Relative paths
/// resolve against `base_dir`.
pub fn build(settings: &PlaylistSettings, base_dir: &Path) -> Result<Playlist> {
    let tracks = match &settings.directory {
        Some(dir) => scan(&resolve(base_dir, dir), &settings.extensions),
        None => settings
            .tracks
            .iter()
            .map(|entry| from_entry(entry, base_dir))
            .collect(),
    };

    info!(count = tracks.len(), "playlist built");
    Playlist::new(tracks)
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn from_entry(entry: &TrackEntry, base_dir: &Path) -> Track {
    let source = resolve(base_dir, &entry.source);
    let duration = probe_duration(&source);
    Track {
        title: entry.title.clone(),
        artist: entry.artist.clone(),
        source,
        cover: entry.cover.clone(),
        duration,
    }
}

/// Read the track length from the file's properties. Missing or unreadable
/// files simply have no known duration.
pub(crate) fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not probe duration");
            None
        }
    }
}

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn find_cover(dir: &Path) -> String {
    COVER_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Scan `dir` recursively for audio files, reading title and artist from tags.
pub fn scan(dir: &Path, extensions: &[String]) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, extensions) {
            continue;
        }

        let mut title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let mut artist = String::new();
        let mut duration: Option<Duration> = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        title = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    artist = v.trim().to_string();
                }
            }
        }

        let cover = path.parent().map(find_cover).unwrap_or_default();

        tracks.push(Track {
            title,
            artist,
            source: path.to_path_buf(),
            cover,
            duration,
        });
    }

    tracks.sort_by_key(|t| format!("{} - {}", t.artist, t.title).to_lowercase());
    tracks
}
