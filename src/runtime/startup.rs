use std::path::PathBuf;

use tracing::info;

use crate::audio::AudioEngine;
use crate::config;
use crate::error::{PlayerError, Result};
use crate::player::{Controller, TransitionOptions};
use crate::playlist;

/// Build the playlist, start the audio engine and wrap both in a controller.
///
/// `directory` (from the command line) replaces any configured playlist source.
pub fn build_controller(
    settings: &config::Settings,
    directory: Option<PathBuf>,
) -> Result<Controller<AudioEngine>> {
    let mut playlist_settings = settings.playlist.clone();
    if directory.is_some() {
        playlist_settings.directory = directory;
    }

    // Fail on an empty playlist before any audio thread exists.
    let playlist = playlist::build(&playlist_settings, &config::base_dir())?;
    let engine = AudioEngine::new(settings.audio.clone());

    let mut controller = Controller::new(
        playlist,
        engine,
        TransitionOptions {
            resume_in_place: settings.audio.resume_in_place,
        },
    );

    if settings.ui.show_on_start {
        controller.show();
    }
    Ok(controller)
}

/// `--write-config`: dump the defaults to the resolved config path.
pub fn write_config() -> Result<()> {
    let path = config::resolve_config_path().ok_or_else(|| {
        PlayerError::InvalidSettings(
            "no config location; set JUKEBAR_CONFIG_PATH or HOME".to_string(),
        )
    })?;

    if config::Settings::write_default(&path)? {
        info!(path = %path.display(), "wrote default config");
        println!("jukebar: wrote default config to {}", path.display());
    } else {
        println!("jukebar: {} already exists, left untouched", path.display());
    }
    Ok(())
}
