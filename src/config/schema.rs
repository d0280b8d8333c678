use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playlist: PlaylistSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Maximum number of tracks a playlist built from these settings holds.
    pub capacity: usize,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields to render on a playlist line, and in what order.
    ///
    /// Example: ["artist", "title"]
    pub fields: Vec<TrackField>,

    /// Separator used to join `fields`.
    pub separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![TrackField::Artist, TrackField::Title, TrackField::Duration],
            separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Artist,
    /// Track length, rendered as zero-padded `mm:ss`.
    #[serde(alias = "length", alias = "time")]
    Duration,
}
