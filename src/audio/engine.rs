use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::error::{PlayerError, Result};
use crate::player::{Notice, PlaybackPrimitive, PlayerEvent};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent};

/// Command proxy for the audio thread; the controller's playback primitive.
pub struct AudioEngine {
    tx: Sender<AudioCmd>,
    events: Receiver<AudioEvent>,
    generation: u64,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioEngine {
    pub fn new(settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (events_tx, events) = mpsc::channel::<AudioEvent>();
        let handle = spawn_audio_thread(rx, events_tx, settings);

        Self {
            tx,
            events,
            generation: 0,
            join: Mutex::new(Some(handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<()> {
        self.tx.send(cmd).map_err(|_| PlayerError::EngineGone)
    }

    /// Drain pending notifications as controller events.
    pub fn poll_events(&self) -> Vec<PlayerEvent> {
        self.events
            .try_iter()
            .filter_map(|event| to_player_event(event, self.generation))
            .collect()
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

/// Translate a notification, dropping those that belong to a replaced source.
pub(super) fn to_player_event(event: AudioEvent, current_generation: u64) -> Option<PlayerEvent> {
    if event
        .generation()
        .is_some_and(|generation| generation != current_generation)
    {
        return None;
    }
    Some(match event {
        AudioEvent::Progress {
            position, duration, ..
        } => PlayerEvent::ProgressTick { position, duration },
        AudioEvent::Ended { .. } => PlayerEvent::TrackEnded,
        AudioEvent::Failed { reason, .. } => PlayerEvent::PlaybackFailed { reason },
        AudioEvent::DeviceUnavailable { reason } => {
            PlayerEvent::Notify(Notice::warning(format!("No audio output: {reason}")))
        }
    })
}

impl PlaybackPrimitive for AudioEngine {
    fn set_source(&mut self, locator: &Path) -> Result<()> {
        self.generation += 1;
        self.send(AudioCmd::Load {
            source: locator.to_path_buf(),
            generation: self.generation,
        })
    }

    fn play(&mut self) -> Result<()> {
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(AudioCmd::Pause)
    }
}
