use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::load::scan;
use super::*;
use crate::config::{PlaylistSettings, TrackEntry};
use crate::error::PlayerError;

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "Artist".into(),
        source: PathBuf::from(format!("/tmp/{title}.mp3")),
        cover: String::new(),
        duration: None,
    }
}

#[test]
fn empty_playlist_is_rejected() {
    assert!(matches!(
        Playlist::new(Vec::new()),
        Err(PlayerError::EmptyPlaylist)
    ));
}

#[test]
fn step_wraps_in_both_directions() {
    let p = Playlist::new(vec![t("a"), t("b"), t("c")]).unwrap();

    assert_eq!(p.step(0, Direction::Previous), 2);
    assert_eq!(p.step(2, Direction::Next), 0);
    assert_eq!(p.step(1, Direction::Next), 2);
    assert_eq!(p.step(1, Direction::Previous), 0);
}

#[test]
fn step_on_single_track_stays_put() {
    let p = Playlist::new(vec![t("solo")]).unwrap();
    assert_eq!(p.step(0, Direction::Next), 0);
    assert_eq!(p.step(0, Direction::Previous), 0);
}

#[test]
fn any_step_sequence_stays_in_range() {
    let p = Playlist::new(vec![t("a"), t("b"), t("c"), t("d"), t("e")]).unwrap();
    let mut index = 0;
    let pattern = [
        Direction::Previous,
        Direction::Previous,
        Direction::Next,
        Direction::Previous,
        Direction::Next,
        Direction::Next,
        Direction::Next,
    ];
    for (n, dir) in pattern.iter().cycle().take(200).enumerate() {
        index = p.step(index, *dir);
        assert!(index < p.tracks().len(), "step {n} escaped range: {index}");
    }
}

#[test]
fn build_resolves_relative_sources_against_base_dir() {
    let base = Path::new("/srv/site");
    let settings = PlaylistSettings {
        tracks: vec![
            TrackEntry {
                title: "One".into(),
                artist: "Band".into(),
                source: PathBuf::from("music/one.mp3"),
                cover: "one.jpg".into(),
            },
            TrackEntry {
                title: "Two".into(),
                artist: "Band".into(),
                source: PathBuf::from("/elsewhere/two.mp3"),
                cover: String::new(),
            },
        ],
        ..PlaylistSettings::default()
    };

    let playlist = build(&settings, base).unwrap();
    assert_eq!(playlist.tracks().len(), 2);
    assert_eq!(
        playlist.track(0).source,
        PathBuf::from("/srv/site/music/one.mp3")
    );
    assert_eq!(playlist.track(0).cover, "one.jpg");
    assert_eq!(playlist.track(0).duration, None);
    assert_eq!(playlist.track(1).source, PathBuf::from("/elsewhere/two.mp3"));
}

#[test]
fn build_with_no_tracks_fails_fast() {
    let settings = PlaylistSettings {
        tracks: Vec::new(),
        ..PlaylistSettings::default()
    };
    assert!(matches!(
        build(&settings, Path::new("/")),
        Err(PlayerError::EmptyPlaylist)
    ));
}

#[test]
fn scan_filters_non_audio_sorts_and_finds_cover() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();
    fs::write(dir.path().join("cover.jpg"), b"jpeg").unwrap();

    let settings = PlaylistSettings::default();
    let tracks = scan(dir.path(), &settings.extensions);
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "A");
    assert_eq!(tracks[1].title, "b");
    assert_eq!(tracks[0].artist, "");
    assert!(tracks[0].cover.ends_with("cover.jpg"));
}

#[test]
fn build_prefers_directory_over_fixed_tracks() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only.flac"), b"not real").unwrap();

    let settings = PlaylistSettings {
        directory: Some(dir.path().to_path_buf()),
        ..PlaylistSettings::default()
    };
    let playlist = build(&settings, Path::new("/")).unwrap();
    assert_eq!(playlist.tracks().len(), 1);
    assert_eq!(playlist.track(0).title, "only");
    assert_eq!(playlist.track(0).cover, "");
}
