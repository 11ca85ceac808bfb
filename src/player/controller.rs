use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::playlist::{Direction, Playlist, Track};

use super::state::PlayerState;
use super::transition::{Effect, PlayerEvent, TransitionOptions, transition};

/// The audio facility the controller drives.
///
/// Implementations load and play asynchronously; failures that happen after a
/// call returns come back to the controller as [`PlayerEvent::PlaybackFailed`].
pub trait PlaybackPrimitive {
    fn set_source(&mut self, locator: &Path) -> Result<()>;
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
}

/// Notified after every event that changed the player state.
pub trait PlayerObserver {
    fn state_changed(&mut self, state: &PlayerState, track: &Track);
}

/// Owns the playlist, the session state and the playback primitive.
pub struct Controller<P: PlaybackPrimitive> {
    playlist: Playlist,
    state: PlayerState,
    primitive: P,
    options: TransitionOptions,
    observers: Vec<Box<dyn PlayerObserver>>,
}

impl<P: PlaybackPrimitive> Controller<P> {
    pub fn new(playlist: Playlist, primitive: P, options: TransitionOptions) -> Self {
        Self {
            playlist,
            state: PlayerState::default(),
            primitive,
            options,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.track(self.state.current)
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn subscribe(&mut self, mut observer: Box<dyn PlayerObserver>) {
        observer.state_changed(&self.state, self.current_track());
        self.observers.push(observer);
    }

    /// Run one event through the transition function and carry out its effects.
    pub fn dispatch(&mut self, event: PlayerEvent) {
        let (next, effects) = transition(&self.state, &event, &self.playlist, &self.options);
        let previous = std::mem::replace(&mut self.state, next);
        if !matches!(event, PlayerEvent::ProgressTick { .. }) {
            debug!(
                ?event,
                ?effects,
                phase = ?self.state.phase(),
                current = self.state.current,
                "player event"
            );
        }

        for effect in effects {
            if let Err(e) = self.apply(effect) {
                warn!(?effect, error = %e, "playback primitive rejected command");
                let failed = PlayerEvent::PlaybackFailed {
                    reason: e.to_string(),
                };
                let (state, _) = transition(&self.state, &failed, &self.playlist, &self.options);
                self.state = state;
                break;
            }
        }

        if self.state != previous {
            self.notify_observers();
        }
    }

    fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Bind(index) => {
                let source = self.playlist.track(index).source.clone();
                self.primitive.set_source(&source)
            }
            Effect::Play => self.primitive.play(),
            Effect::Pause => self.primitive.pause(),
        }
    }

    fn notify_observers(&mut self) {
        let track = self.playlist.track(self.state.current);
        for observer in &mut self.observers {
            observer.state_changed(&self.state, track);
        }
    }

    pub fn toggle_playback(&mut self) {
        self.dispatch(PlayerEvent::TogglePlayback);
    }

    pub fn advance(&mut self, direction: Direction) {
        self.dispatch(PlayerEvent::Advance(direction));
    }

    pub fn on_track_ended(&mut self) {
        self.dispatch(PlayerEvent::TrackEnded);
    }

    pub fn on_progress_tick(
        &mut self,
        position: std::time::Duration,
        duration: Option<std::time::Duration>,
    ) {
        self.dispatch(PlayerEvent::ProgressTick { position, duration });
    }

    pub fn show(&mut self) {
        self.dispatch(PlayerEvent::Show);
    }

    pub fn hide(&mut self) {
        self.dispatch(PlayerEvent::Hide);
    }

    pub fn show_and_play(&mut self) {
        self.dispatch(PlayerEvent::ShowAndPlay);
    }
}
