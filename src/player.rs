//! Playback controller.
//!
//! `PlayerState` holds the session (current track, play/pause, visibility),
//! `transition` computes state changes as pure functions of events, and
//! `Controller` applies them and drives a [`PlaybackPrimitive`].

mod controller;
mod format;
mod state;
mod transition;
mod view;

pub use controller::{Controller, PlaybackPrimitive, PlayerObserver};
pub use state::*;
pub use transition::{PlayerEvent, TransitionOptions};
pub use view::PlayerView;
