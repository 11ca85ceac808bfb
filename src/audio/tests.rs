use std::time::Duration;

use super::engine::to_player_event;
use super::types::AudioEvent;
use crate::player::{NoticeLevel, PlayerEvent};

#[test]
fn stale_notifications_are_dropped() {
    let ended = AudioEvent::Ended { generation: 3 };
    assert_eq!(to_player_event(ended.clone(), 4), None);
    assert_eq!(to_player_event(ended, 3), Some(PlayerEvent::TrackEnded));
}

#[test]
fn progress_and_failure_map_to_controller_events() {
    let progress = AudioEvent::Progress {
        generation: 1,
        position: Duration::from_secs(12),
        duration: Some(Duration::from_secs(180)),
    };
    assert_eq!(
        to_player_event(progress, 1),
        Some(PlayerEvent::ProgressTick {
            position: Duration::from_secs(12),
            duration: Some(Duration::from_secs(180)),
        })
    );

    let failed = AudioEvent::Failed {
        generation: 2,
        reason: "no audio output device".into(),
    };
    assert_eq!(
        to_player_event(failed, 2),
        Some(PlayerEvent::PlaybackFailed {
            reason: "no audio output device".into()
        })
    );
}

#[test]
fn missing_device_becomes_warning_for_any_generation() {
    let unavailable = AudioEvent::DeviceUnavailable {
        reason: "no default output device".into(),
    };
    assert_eq!(unavailable.generation(), None);

    let Some(PlayerEvent::Notify(notice)) = to_player_event(unavailable, 5) else {
        panic!("expected a notice");
    };
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "No audio output: no default output device");
}
