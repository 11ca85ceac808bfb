//! `rodio`-backed playback primitive.
//!
//! Audio runs on a dedicated thread that owns the output stream and the
//! current sink. [`AudioEngine`] forwards commands to it and turns its
//! progress/ended/failed notifications into controller events.

mod engine;
mod sink;
mod thread;
mod types;

pub use engine::AudioEngine;

#[cfg(test)]
mod tests;
