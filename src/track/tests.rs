use super::display::{display_from_fields, format_mmss};
use super::model::Track;
use crate::config::TrackField;
use std::time::Duration;

#[test]
fn format_mmss_zero_pads_minutes_and_seconds() {
    assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
    assert_eq!(format_mmss(Duration::from_secs(61)), "01:01");
    assert_eq!(format_mmss(Duration::from_secs(245)), "04:05");
    assert_eq!(format_mmss(Duration::from_secs(3600)), "60:00");
}

#[test]
fn display_from_fields_can_format_artist_title() {
    let track = Track::from_secs("Song", "Artist", 245);
    assert_eq!(
        display_from_fields(&track, &[TrackField::Artist, TrackField::Title], " - "),
        "Artist - Song"
    );

    let padded = Track::from_secs("Song", "  Artist  ", 245);
    assert_eq!(
        display_from_fields(&padded, &[TrackField::Artist, TrackField::Title], " - "),
        "Artist - Song"
    );
}

#[test]
fn display_from_fields_skips_blank_artist() {
    let track = Track::from_secs("Song", "   ", 245);
    assert_eq!(
        display_from_fields(&track, &[TrackField::Artist, TrackField::Title], " - "),
        "Song"
    );
}

#[test]
fn display_from_fields_falls_back_to_title_when_nothing_matched() {
    let track = Track::from_secs("Song", "", 245);
    assert_eq!(
        display_from_fields(&track, &[TrackField::Artist], " - "),
        "Song"
    );
}

#[test]
fn display_from_fields_renders_duration_and_separator() {
    let track = Track::from_secs("Song", "Artist", 245);
    assert_eq!(
        display_from_fields(
            &track,
            &[TrackField::Title, TrackField::Duration],
            " :: "
        ),
        "Song :: 04:05"
    );
}

#[test]
fn track_display_is_a_single_default_formatted_line() {
    let track = Track::from_secs("Song", "Artist", 245);
    let line = track.to_string();
    assert_eq!(line, "Artist - Song - 04:05");
    assert!(!line.contains('\n'));
}

#[test]
fn from_secs_matches_new_with_duration() {
    let a = Track::from_secs("Song", "Artist", 90);
    let b = Track::new("Song", "Artist", Duration::from_secs(90));
    assert_eq!(a, b);
}
