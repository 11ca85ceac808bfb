//! Pure state transitions of the playback controller.
//!
//! `transition` maps the current state and one event to the next state plus
//! the effects the playback primitive must carry out. Nothing here touches
//! audio or the screen.

use std::time::Duration;

use crate::playlist::{Direction, Playlist};

use super::format::progress_percent;
use super::state::{Notice, PlayerState, Progress, Visibility};

/// Everything that can happen to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Play/pause control on the player surface.
    TogglePlayback,
    /// Previous/next controls on the player surface.
    Advance(Direction),
    /// The primitive finished the current source.
    TrackEnded,
    /// Periodic position report from the primitive.
    ProgressTick {
        position: Duration,
        duration: Option<Duration>,
    },
    Show,
    /// Close control: hides the surface and stops playback.
    Hide,
    /// A "play" affordance outside the surface.
    ShowAndPlay,
    /// The primitive could not load or play the bound source.
    PlaybackFailed { reason: String },
    Notify(Notice),
    DismissNotice,
}

/// Instruction for the playback primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Bind the source of the track at this index.
    Bind(usize),
    Play,
    Pause,
}

#[derive(Debug, Copy, Clone, Default)]
pub struct TransitionOptions {
    /// Skip rebinding when resuming the track that is already bound.
    pub resume_in_place: bool,
}

/// Apply `event` to `state`.
pub fn transition(
    state: &PlayerState,
    event: &PlayerEvent,
    playlist: &Playlist,
    options: &TransitionOptions,
) -> (PlayerState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        PlayerEvent::TogglePlayback => {
            if !next.is_visible() {
                return (next, effects);
            }
            if next.playing {
                pause(&mut next, &mut effects);
            } else {
                start(&mut next, &mut effects, playlist, options);
            }
        }
        PlayerEvent::Advance(direction) => {
            if next.is_visible() {
                advance(&mut next, &mut effects, playlist, *direction);
            }
        }
        PlayerEvent::TrackEnded => {
            if next.is_visible() {
                advance(&mut next, &mut effects, playlist, Direction::Next);
            }
        }
        PlayerEvent::ProgressTick { position, duration } => {
            // Decoders that can't tell the length fall back to the probed tag value.
            let duration = duration.or(playlist.track(next.current).duration);
            match progress_percent(*position, duration) {
                Some(percent) => {
                    next.progress = Progress {
                        percent,
                        position: Some(*position),
                        duration,
                    };
                }
                None => next.progress.duration = None,
            }
        }
        PlayerEvent::Show => next.visibility = Visibility::Visible,
        PlayerEvent::Hide => {
            next.visibility = Visibility::Hidden;
            pause(&mut next, &mut effects);
        }
        PlayerEvent::ShowAndPlay => {
            next.visibility = Visibility::Visible;
            if !next.playing {
                start(&mut next, &mut effects, playlist, options);
            }
        }
        PlayerEvent::PlaybackFailed { reason } => {
            next.playing = false;
            next.bound = None;
            let title = &playlist.track(next.current).title;
            next.notice = Some(Notice::error(format!("Couldn't play \"{title}\": {reason}")));
        }
        PlayerEvent::Notify(notice) => next.notice = Some(notice.clone()),
        PlayerEvent::DismissNotice => next.notice = None,
    }

    (next, effects)
}

fn pause(state: &mut PlayerState, effects: &mut Vec<Effect>) {
    effects.push(Effect::Pause);
    state.playing = false;
}

fn start(
    state: &mut PlayerState,
    effects: &mut Vec<Effect>,
    playlist: &Playlist,
    options: &TransitionOptions,
) {
    let already_bound = state.bound == Some(state.current);
    if !(options.resume_in_place && already_bound) {
        bind(state, effects, playlist);
    }
    effects.push(Effect::Play);
    state.playing = true;
}

fn advance(
    state: &mut PlayerState,
    effects: &mut Vec<Effect>,
    playlist: &Playlist,
    direction: Direction,
) {
    state.current = playlist.step(state.current, direction);
    bind(state, effects, playlist);
    if state.playing {
        effects.push(Effect::Play);
    }
}

fn bind(state: &mut PlayerState, effects: &mut Vec<Effect>, playlist: &Playlist) {
    effects.push(Effect::Bind(state.current));
    state.bound = Some(state.current);
    state.progress = Progress::starting(playlist.track(state.current).duration);
}
