use std::time::Duration;

use crate::config::TrackField;

use super::model::Track;

/// Field order used when no configuration is in play.
pub(crate) const DEFAULT_FIELDS: &[TrackField] =
    &[TrackField::Artist, TrackField::Title, TrackField::Duration];

/// Build a display line for a track according to the provided `fields` and separator.
///
/// This composes the track fields (artist, title, duration) in the configured
/// order and falls back to `title` when no parts were produced.
pub fn display_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackField::Artist => {
                if !track.artist.trim().is_empty() {
                    parts.push(track.artist.trim().to_string());
                }
            }
            TrackField::Duration => {
                parts.push(format_mmss(track.duration));
            }
        }
    }

    if parts.is_empty() {
        track.title.to_string()
    } else {
        parts.join(sep)
    }
}

/// Format a duration as zero-padded `mm:ss`.
pub fn format_mmss(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
