use super::*;
use crate::player::{Progress, Visibility};
use std::path::PathBuf;
use std::time::Duration;

fn make_track() -> Track {
    Track {
        title: "Test Title".to_string(),
        artist: "Test Artist".to_string(),
        source: PathBuf::from("/tmp/music/test.mp3"),
        cover: "/tmp/music/cover.jpg".to_string(),
        duration: Some(Duration::from_micros(1_234_567)),
    }
}

fn handle() -> (MprisHandle, Arc<Mutex<SharedState>>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    (
        MprisHandle {
            state: state.clone(),
        },
        state,
    )
}

#[test]
fn observer_copies_track_and_phase() {
    let (mut h, state) = handle();
    let player = PlayerState {
        current: 7,
        playing: true,
        visibility: Visibility::Visible,
        ..PlayerState::default()
    };

    h.state_changed(&player, &make_track());

    let s = state.lock().unwrap();
    assert_eq!(s.phase, Phase::Playing);
    assert_eq!(s.index, 7);
    assert_eq!(s.title, "Test Title");
    assert_eq!(s.artist, "Test Artist");
    assert_eq!(s.art_url, "/tmp/music/cover.jpg");
    assert!(s.url.contains("/tmp/music/test.mp3"));
    assert_eq!(s.length_micros, Some(1_234_567));
}

#[test]
fn reported_duration_wins_over_probed_length() {
    let (mut h, state) = handle();
    let player = PlayerState {
        progress: Progress {
            percent: 0.0,
            position: None,
            duration: Some(Duration::from_secs(2)),
        },
        ..PlayerState::default()
    };

    h.state_changed(&player, &make_track());
    assert_eq!(state.lock().unwrap().length_micros, Some(2_000_000));
}

#[test]
fn playback_status_maps_phases() {
    assert_eq!(playback_status(Phase::Hidden), "Stopped");
    assert_eq!(playback_status(Phase::Paused), "Paused");
    assert_eq!(playback_status(Phase::Playing), "Playing");
}

#[test]
fn metadata_map_contains_expected_keys() {
    let (mut h, state) = handle();
    h.state_changed(&PlayerState::default(), &make_track());

    let map = metadata_map(&state.lock().unwrap());
    for key in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "mpris:artUrl",
        "xesam:url",
        "mpris:length",
    ] {
        assert!(map.contains_key(key), "missing {key}");
    }
}

#[test]
fn metadata_map_skips_empty_artist_and_art() {
    let map = metadata_map(&SharedState::default());
    assert!(!map.contains_key("xesam:artist"));
    assert!(!map.contains_key("mpris:artUrl"));
    assert!(!map.contains_key("mpris:length"));
    assert!(map.contains_key("xesam:title"));
}
