//! Data models for JioSaavn API responses.
//!
//! This module contains the data structures used to represent songs
//! and their nested album, artist and artwork metadata.

pub mod song;

// Re-exports for convenience
pub use song::{Image, Song, SongAlbum, SongArtist, SongArtists};
