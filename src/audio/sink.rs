//! Open and decode a source into a paused `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::{PlayerError, Result};

/// Create a paused `Sink` for `source` and report the decoder's total duration.
pub(super) fn create_sink(
    stream: &OutputStream,
    source: &Path,
    volume: f32,
) -> Result<(Sink, Option<Duration>)> {
    let file = File::open(source).map_err(|e| PlayerError::OpenSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;
    let duration = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(decoder);
    sink.pause();
    Ok((sink, duration))
}
