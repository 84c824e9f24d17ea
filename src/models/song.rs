//! Song-related models.
//!
//! This module contains the canonical song record produced from raw
//! JioSaavn suggestion payloads, along with its nested album and
//! artist information.

use serde::{Deserialize, Serialize};

/// Image with URL and quality label.
///
/// JioSaavn serves artwork at fixed sizes; `quality` is the size
/// string (e.g. "500x500").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Quality label, e.g. "50x50", "150x150" or "500x500".
    pub quality: String,

    /// URL to the image at this quality.
    pub url: String,
}

impl Image {
    /// Create a new image link.
    pub fn new<S1: Into<String>, S2: Into<String>>(quality: S1, url: S2) -> Self {
        Self {
            quality: quality.into(),
            url: url.into(),
        }
    }
}

/// Album when nested inside a song context.
///
/// Contains basic identifying information only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongAlbum {
    /// Album ID, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Album name.
    pub name: String,

    /// Permalink to the album page, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Artist when nested inside a song context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongArtist {
    /// Artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Role in this song: "primary", "featured" or "singer".
    pub role: String,

    /// Artwork links in various qualities.
    #[serde(default)]
    pub image: Vec<Image>,

    /// Permalink to the artist page, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SongArtist {
    /// Create a new artist with an ID, name and role.
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        id: S1,
        name: S2,
        role: S3,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            image: Vec::new(),
            url: None,
        }
    }
}

/// Grouped artist credits for a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongArtists {
    /// Primary (main) artists.
    #[serde(default)]
    pub primary: Vec<SongArtist>,

    /// Featured artists.
    #[serde(default)]
    pub featured: Vec<SongArtist>,

    /// Every credited artist.
    #[serde(default)]
    pub all: Vec<SongArtist>,
}

/// A canonical song record.
///
/// The normalized representation of a track used by the rest of the
/// system, built from a raw suggestion entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Type marker for serialization.
    #[serde(rename = "type", default = "default_song_type")]
    pub type_: String,

    /// Song ID.
    pub id: String,

    /// Song name.
    pub name: String,

    /// Release year, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Release date ("YYYY-MM-DD"), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Duration in seconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    /// Record label, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether the song has explicit content.
    #[serde(default)]
    pub explicit: bool,

    /// Play count, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,

    /// Track language.
    pub language: String,

    /// Permalink to the song page, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Album containing this song.
    pub album: SongAlbum,

    /// Artist credits.
    pub artists: SongArtists,

    /// Artwork links in various qualities.
    #[serde(default)]
    pub image: Vec<Image>,
}

fn default_song_type() -> String {
    "song".to_string()
}

impl Song {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.primary.first().map(|a| a.name.as_str())
    }

    /// Get all primary artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .primary
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration.unwrap_or(0);
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
