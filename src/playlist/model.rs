//! Playlist model: a fixed-capacity, ordered list of tracks.
//!
//! The capacity is chosen at construction and never changes. Occupied slots
//! are contiguous from index 0, so every completed operation leaves the list
//! gap-free. Mutations either fully apply or decline without touching state.

use std::fmt;
use std::time::Duration;

use rand::rng;
use rand::seq::SliceRandom;

use crate::config::{PlaylistSettings, TrackField};
use crate::track::{Track, display_from_fields};

use super::sort;

/// A bounded, ordered playlist of tracks.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
    capacity: usize,
}

impl Playlist {
    /// Create an empty playlist holding at most `capacity` tracks.
    pub fn new(capacity: usize) -> Self {
        Self {
            tracks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty playlist with the configured default capacity.
    pub fn from_settings(settings: &PlaylistSettings) -> Self {
        Self::new(settings.capacity)
    }

    /// Return true if the playlist holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Return true if no further track fits.
    pub fn is_full(&self) -> bool {
        self.tracks.len() == self.capacity
    }

    /// Maximum number of tracks this playlist can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Borrow the track at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Borrow the occupied region as a slice.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over the tracks in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Index of the first track whose title equals `title`.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.title == title)
    }

    /// Title of the shortest track; ties go to the earliest occurrence.
    pub fn shortest_track_title(&self) -> Option<&str> {
        sort::min_duration_index_from(&self.tracks, 0).map(|i| self.tracks[i].title.as_str())
    }

    /// Borrow the first track, or `None` when the playlist is empty.
    pub fn first(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Combined length of all tracks.
    pub fn total_duration(&self) -> Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    /// Append `track` at the end.
    ///
    /// Returns `false` and leaves the playlist unchanged when it is full.
    pub fn push(&mut self, track: Track) -> bool {
        if self.is_full() {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Insert `track` at `index`, shifting later tracks one slot toward the tail.
    ///
    /// `index == len()` appends. Returns `false` and leaves the playlist
    /// unchanged when it is full or when `index` lies past the end; an insert
    /// can never create a gap in the occupied region.
    pub fn insert(&mut self, index: usize, track: Track) -> bool {
        if self.is_full() || index > self.tracks.len() {
            return false;
        }
        self.tracks.insert(index, track);
        true
    }

    /// Remove and return the track at `index`, closing the gap.
    ///
    /// Later tracks shift one slot toward the head. Returns `None` and leaves
    /// the playlist unchanged when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }
        Some(self.tracks.remove(index))
    }

    /// Remove and return the first track titled `title`, if present.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Track> {
        let index = self.index_of(title)?;
        self.remove(index)
    }

    /// Remove and return the first track, if any.
    pub fn remove_first(&mut self) -> Option<Track> {
        self.remove(0)
    }

    /// Remove and return the last track, if any. Never shifts.
    pub fn remove_last(&mut self) -> Option<Track> {
        self.tracks.pop()
    }

    /// Append a copy of every track of `other`, in order.
    ///
    /// All-or-nothing: when the combined size would exceed this playlist's
    /// capacity, nothing is appended and `false` is returned.
    pub fn extend_from(&mut self, other: &Playlist) -> bool {
        if self.tracks.len() + other.tracks.len() > self.capacity {
            return false;
        }
        self.tracks.extend(other.tracks.iter().cloned());
        true
    }

    /// Sort the playlist in place by ascending duration.
    ///
    /// Equal durations keep their relative selection order (the earliest
    /// minimum is always picked first).
    pub fn sort_by_duration(&mut self) {
        sort::selection_sort_by_duration(&mut self.tracks);
    }

    /// Shuffle the playlist in place.
    pub fn shuffle(&mut self) {
        self.tracks.shuffle(&mut rng());
    }

    /// Render every track on its own line using the given field composition.
    ///
    /// Lines are joined with `\n`; there is no trailing newline.
    pub fn render(&self, fields: &[TrackField], sep: &str) -> String {
        self.tracks
            .iter()
            .map(|t| display_from_fields(t, fields, sep))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Playlist {
    /// One default-formatted track line per occupied slot, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{track}")?;
        }
        Ok(())
    }
}
