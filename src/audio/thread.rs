use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, warn};

use crate::config::AudioSettings;
use crate::error::PlayerError;

use super::sink::create_sink;
use super::types::{AudioCmd, AudioEvent};

/// The source currently held by the audio thread.
struct Loaded {
    sink: Sink,
    duration: Option<Duration>,
    generation: u64,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = OutputStreamBuilder::open_default_stream()
            .map(|mut stream| {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                stream.log_on_drop(false);
                stream
            })
            .map_err(PlayerError::from);
        if let Err(e) = &stream {
            error!(error = %e, "audio output unavailable");
            let _ = events.send(AudioEvent::DeviceUnavailable {
                reason: e.to_string(),
            });
        }

        let tick = Duration::from_millis(settings.tick_ms.max(1));
        let volume = settings.volume.clamp(0.0, 1.0);
        let mut loaded: Option<Loaded> = None;
        let mut playing = false;
        let mut last_tick = Instant::now();

        loop {
            match rx.recv_timeout(tick) {
                Ok(AudioCmd::Load { source, generation }) => {
                    if let Some(old) = loaded.take() {
                        old.sink.stop();
                    }
                    playing = false;

                    match load(&stream, &source, volume) {
                        Ok((sink, duration)) => {
                            debug!(path = %source.display(), generation, "source loaded");
                            let _ = events.send(AudioEvent::Progress {
                                generation,
                                position: Duration::ZERO,
                                duration,
                            });
                            loaded = Some(Loaded {
                                sink,
                                duration,
                                generation,
                            });
                        }
                        Err(reason) => {
                            warn!(path = %source.display(), %reason, "failed to load source");
                            let _ = events.send(AudioEvent::Failed { generation, reason });
                        }
                    }
                }
                Ok(AudioCmd::Play) => {
                    if let Some(l) = &loaded {
                        l.sink.play();
                        playing = true;
                        last_tick = Instant::now();
                    }
                }
                Ok(AudioCmd::Pause) => {
                    if let Some(l) = &loaded {
                        l.sink.pause();
                    }
                    playing = false;
                }
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    if let Some(l) = &loaded {
                        fade_out_sink(&l.sink, volume, fade_out_ms);
                        l.sink.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if !playing {
                continue;
            }
            let Some(l) = &loaded else {
                continue;
            };

            if l.sink.empty() {
                let _ = events.send(AudioEvent::Ended {
                    generation: l.generation,
                });
                loaded = None;
                playing = false;
            } else if last_tick.elapsed() >= tick {
                last_tick = Instant::now();
                let _ = events.send(AudioEvent::Progress {
                    generation: l.generation,
                    position: l.sink.get_pos(),
                    duration: l.duration,
                });
            }
        }
    })
}

fn load(
    stream: &Result<OutputStream, PlayerError>,
    source: &std::path::Path,
    volume: f32,
) -> Result<(Sink, Option<Duration>), String> {
    let stream = stream.as_ref().map_err(|e| e.to_string())?;
    create_sink(stream, source, volume).map_err(|e| e.to_string())
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
