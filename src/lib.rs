//! A bounded, ordered, in-memory playlist of music tracks.
//!
//! A [`Playlist`] holds at most a fixed number of [`Track`]s chosen at
//! construction time, keeps the occupied region contiguous and ordered, and
//! supports positional insert/remove, title lookup, duration aggregation,
//! shuffling and an in-place sort by ascending duration. Reads hand out
//! shared borrows; mutations either fully apply or leave the list untouched.
//!
//! Defaults such as the playlist capacity and the track line format can be
//! loaded from `config.toml` or `SETLIST__*` environment variables via
//! [`config::Settings`].

pub mod config;
pub mod playlist;
pub mod track;

pub use playlist::Playlist;
pub use track::Track;
