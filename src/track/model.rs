use std::fmt;
use std::time::Duration;

use super::display;

/// A single music track: title, artist and length.
///
/// Lookup operations on a playlist compare tracks by `title` only; full
/// equality (all three fields) is what `PartialEq` implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration: Duration,
}

impl Track {
    /// Create a new track.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    /// Create a new track with the length given in whole seconds.
    pub fn from_secs(title: impl Into<String>, artist: impl Into<String>, secs: u64) -> Self {
        Self::new(title, artist, Duration::from_secs(secs))
    }
}

impl fmt::Display for Track {
    /// Render the track as a single line, e.g. `Artist - Title - 04:05`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display::display_from_fields(
            self,
            display::DEFAULT_FIELDS,
            " - ",
        ))
    }
}
