//! MPRIS D-Bus service so media keys and `playerctl` can drive the player.
//!
//! Inbound method calls become [`ControlCmd`]s on a channel; outbound
//! properties are read from a shared snapshot that [`MprisHandle`] keeps in
//! sync as a controller observer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use tracing::{info, warn};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedValue, Value};

use crate::player::{Phase, PlayerObserver, PlayerState};
use crate::playlist::Track;

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const BUS_NAME: &str = "org.mpris.MediaPlayer2.jukebar";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq)]
struct SharedState {
    phase: Phase,
    index: usize,
    title: String,
    artist: String,
    art_url: String,
    url: String,
    length_micros: Option<i64>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            index: 0,
            title: String::new(),
            artist: String::new(),
            art_url: String::new(),
            url: String::new(),
            length_micros: None,
        }
    }
}

#[derive(Clone)]
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl PlayerObserver for MprisHandle {
    fn state_changed(&mut self, state: &PlayerState, track: &Track) {
        if let Ok(mut s) = self.state.lock() {
            s.phase = state.phase();
            s.index = state.current;
            s.title = track.title.clone();
            s.artist = track.artist.clone();
            s.art_url = track.cover.clone();
            s.url = format!("file://{}", track.source.display());
            s.length_micros = state
                .progress
                .duration
                .or(track.duration)
                .map(|d| d.as_micros().min(i64::MAX as u128) as i64);
        }
    }
}

fn playback_status(phase: Phase) -> &'static str {
    match phase {
        Phase::Hidden => "Stopped",
        Phase::Paused => "Paused",
        Phase::Playing => "Playing",
    }
}

fn owned(value: Value<'_>) -> Option<OwnedValue> {
    OwnedValue::try_from(value).ok()
}

fn metadata_map(s: &SharedState) -> HashMap<String, OwnedValue> {
    let mut map = HashMap::new();

    let track_id = format!("/org/jukebar/track/{}", s.index);
    if let Some(v) = ObjectPath::try_from(track_id.as_str())
        .ok()
        .and_then(|p| owned(Value::from(p)))
    {
        map.insert("mpris:trackid".to_string(), v);
    }
    if let Some(v) = owned(Value::from(s.title.clone())) {
        map.insert("xesam:title".to_string(), v);
    }
    if !s.artist.is_empty() {
        if let Some(v) = owned(Value::from(vec![s.artist.clone()])) {
            map.insert("xesam:artist".to_string(), v);
        }
    }
    if !s.art_url.is_empty() {
        if let Some(v) = owned(Value::from(s.art_url.clone())) {
            map.insert("mpris:artUrl".to_string(), v);
        }
    }
    if let Some(v) = owned(Value::from(s.url.clone())) {
        map.insert("xesam:url".to_string(), v);
    }
    if let Some(len) = s.length_micros {
        if let Some(v) = owned(Value::from(len)) {
            map.insert("mpris:length".to_string(), v);
        }
    }
    map
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "jukebar"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec!["file".to_string()]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let phase = self.state.lock().map(|s| s.phase).unwrap_or(Phase::Hidden);
        playback_status(phase)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        self.state
            .lock()
            .map(|s| metadata_map(&s))
            .unwrap_or_default()
    }
}

/// Register the MPRIS service on the session bus from a background thread.
///
/// Failing to reach the bus only disables media-key support.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    warn!(error = %e, "MPRIS: failed to connect to session bus");
                    return;
                }
            };

            if let Err(e) = connection.request_name(BUS_NAME).await {
                warn!(error = %e, "MPRIS: failed to acquire name");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server
                .at(OBJECT_PATH, RootIface { tx: tx.clone() })
                .await
            {
                warn!(error = %e, "MPRIS: failed to register root iface");
                return;
            }

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                warn!(error = %e, "MPRIS: failed to register player iface");
                return;
            }

            info!(name = BUS_NAME, "MPRIS service registered");

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
