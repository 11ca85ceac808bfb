//! Messages exchanged with the audio thread.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current sink with a paused one for `source`.
    Load { source: PathBuf, generation: u64 },
    /// Start or resume the loaded source.
    Play,
    Pause,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Notifications from the audio thread, tagged with the generation of the
/// `Load` they refer to.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    Progress {
        generation: u64,
        position: Duration,
        duration: Option<Duration>,
    },
    Ended {
        generation: u64,
    },
    Failed {
        generation: u64,
        reason: String,
    },
    /// The output device could not be opened; sent once at startup.
    DeviceUnavailable {
        reason: String,
    },
}

impl AudioEvent {
    /// `None` for notifications not tied to a loaded source.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Progress { generation, .. }
            | Self::Ended { generation }
            | Self::Failed { generation, .. } => Some(*generation),
            Self::DeviceUnavailable { .. } => None,
        }
    }
}
