//! JSON to model converters.
//!
//! This module provides functions to convert raw JioSaavn API JSON
//! responses into typed model structures. The android-context API
//! returns most scalar fields as strings ("241", "0"), so the helpers
//! here are lenient about string/number encodings.

use serde_json::Value;

use crate::models::{Image, Song, SongAlbum, SongArtist, SongArtists};

/// Artwork qualities served by the JioSaavn CDN.
const IMAGE_QUALITIES: &[&str] = &["50x50", "150x150", "500x500"];

/// Expand a single artwork URL into links for every known quality.
///
/// The API hands out one URL (usually the 150x150 variant); the other
/// sizes live at the same path with the size segment swapped.
pub fn expand_image_links(url: &str) -> Vec<Image> {
    if url.is_empty() {
        return Vec::new();
    }

    let source = IMAGE_QUALITIES.iter().find(|q| url.contains(*q)).copied();

    match source {
        Some(size) => IMAGE_QUALITIES
            .iter()
            .map(|q| Image::new(*q, url.replace(size, q)))
            .collect(),
        // Unknown layout, keep the URL as-is rather than mangling it
        None => vec![Image::new("150x150", url)],
    }
}

/// Get string from JSON, returning empty string if not found.
fn get_str(json: &Value, key: &str) -> String {
    json.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Get an optional non-empty string from JSON.
fn get_opt_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Get string ID from JSON (handles both string and numeric IDs).
fn get_id(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| {
        if let Some(s) = v.as_str() {
            Some(s.to_string())
        } else if let Some(n) = v.as_u64() {
            Some(n.to_string())
        } else {
            v.as_i64().map(|n| n.to_string())
        }
    })
}

/// Get u64 from JSON, accepting both numbers and numeric strings.
fn get_u64(json: &Value, key: &str) -> Option<u64> {
    json.get(key).and_then(|v| {
        v.as_u64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    })
}

/// Get a boolean flag from JSON, accepting bools, numbers and the
/// string encodings "1"/"true".
fn get_flag(json: &Value, key: &str) -> bool {
    match json.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) != 0,
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Parse an artist in song context.
fn parse_song_artist(json: &Value, fallback_role: &str) -> SongArtist {
    let role = get_opt_str(json, "role").unwrap_or_else(|| fallback_role.to_string());

    SongArtist {
        id: get_id(json, "id").unwrap_or_default(),
        name: get_str(json, "name"),
        role,
        image: expand_image_links(&get_str(json, "image")),
        url: get_opt_str(json, "perma_url"),
    }
}

/// Parse the `artistMap` block into grouped artist credits.
fn parse_artist_map(json: &Value) -> SongArtists {
    let parse_group = |key: &str, role: &str| -> Vec<SongArtist> {
        json.get(key)
            .and_then(|a| a.as_array())
            .map(|arr| arr.iter().map(|a| parse_song_artist(a, role)).collect())
            .unwrap_or_default()
    };

    SongArtists {
        primary: parse_group("primary_artists", "primary"),
        featured: parse_group("featured_artists", "featured"),
        all: parse_group("artists", "singer"),
    }
}

/// Parse album data for song context.
fn parse_song_album(json: &Value, more_info: &Value) -> SongAlbum {
    SongAlbum {
        id: get_id(more_info, "album_id"),
        name: get_opt_str(more_info, "album")
            .or_else(|| get_opt_str(json, "album"))
            .unwrap_or_default(),
        url: get_opt_str(more_info, "album_url"),
    }
}

/// Build a canonical [`Song`] from a raw JioSaavn song object.
///
/// Total over any object carrying a string `id`; every other field
/// falls back to a sensible default when absent. Fields live either at
/// the top level or under `more_info` depending on the API context, so
/// both locations are consulted.
pub fn parse_song(json: &Value) -> Song {
    let more_info = json.get("more_info").cloned().unwrap_or(Value::Null);

    let name = get_opt_str(json, "title")
        .or_else(|| get_opt_str(json, "song"))
        .unwrap_or_default();

    let artists = more_info
        .get("artistMap")
        .map(parse_artist_map)
        .unwrap_or_default();

    Song {
        type_: "song".to_string(),
        id: get_id(json, "id").unwrap_or_default(),
        name,
        year: get_opt_str(json, "year").or_else(|| get_opt_str(&more_info, "year")),
        release_date: get_opt_str(&more_info, "release_date")
            .or_else(|| get_opt_str(json, "release_date")),
        duration: get_u64(&more_info, "duration").or_else(|| get_u64(json, "duration")),
        label: get_opt_str(&more_info, "label").or_else(|| get_opt_str(json, "label")),
        explicit: get_flag(json, "explicit_content") || get_flag(&more_info, "explicit_content"),
        play_count: get_u64(json, "play_count"),
        language: get_str(json, "language"),
        url: get_opt_str(json, "perma_url"),
        album: parse_song_album(json, &more_info),
        artists,
        image: expand_image_links(&get_str(json, "image")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expand_image_links() {
        let images = expand_image_links("https://c.saavncdn.com/238/Cover-150x150.jpg");
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].quality, "50x50");
        assert!(images[0].url.ends_with("Cover-50x50.jpg"));
        assert!(images[2].url.ends_with("Cover-500x500.jpg"));
    }

    #[test]
    fn test_expand_image_links_unknown_size() {
        let images = expand_image_links("https://c.saavncdn.com/238/Cover.jpg");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://c.saavncdn.com/238/Cover.jpg");
    }

    #[test]
    fn test_expand_image_links_empty() {
        assert!(expand_image_links("").is_empty());
    }

    #[test]
    fn test_parse_song_android_shape() {
        let raw = json!({
            "id": "5WXAlMNt",
            "title": "Agar Tum Saath Ho",
            "perma_url": "https://www.jiosaavn.com/song/x/abc",
            "image": "https://c.saavncdn.com/408/Tamasha-150x150.jpg",
            "language": "hindi",
            "year": "2015",
            "play_count": "144061488",
            "explicit_content": "0",
            "more_info": {
                "album": "Tamasha",
                "album_id": "1116530",
                "album_url": "https://www.jiosaavn.com/album/tamasha/xyz",
                "duration": "341",
                "label": "T-Series",
                "release_date": "2015-11-04",
                "artistMap": {
                    "primary_artists": [
                        { "id": "456269", "name": "A.R. Rahman", "role": "music" }
                    ],
                    "featured_artists": [],
                    "artists": [
                        { "id": "455130", "name": "Alka Yagnik" }
                    ]
                }
            }
        });

        let song = parse_song(&raw);
        assert_eq!(song.id, "5WXAlMNt");
        assert_eq!(song.name, "Agar Tum Saath Ho");
        assert_eq!(song.duration, Some(341));
        assert_eq!(song.play_count, Some(144061488));
        assert_eq!(song.year.as_deref(), Some("2015"));
        assert_eq!(song.release_date.as_deref(), Some("2015-11-04"));
        assert_eq!(song.label.as_deref(), Some("T-Series"));
        assert!(!song.explicit);
        assert_eq!(song.album.name, "Tamasha");
        assert_eq!(song.album.id.as_deref(), Some("1116530"));
        assert_eq!(song.artists.primary.len(), 1);
        assert_eq!(song.artists.primary[0].name, "A.R. Rahman");
        assert_eq!(song.artists.primary[0].role, "music");
        assert_eq!(song.artists.all[0].role, "singer");
        assert_eq!(song.image.len(), 3);
    }

    #[test]
    fn test_parse_song_minimal_shape() {
        let song = parse_song(&json!({ "id": "abc123" }));
        assert_eq!(song.id, "abc123");
        assert_eq!(song.name, "");
        assert_eq!(song.duration, None);
        assert!(song.artists.primary.is_empty());
    }

    #[test]
    fn test_parse_song_numeric_fields() {
        let raw = json!({
            "id": 42,
            "song": "Numeric",
            "duration": 200,
            "play_count": 7,
            "explicit_content": 1
        });

        let song = parse_song(&raw);
        assert_eq!(song.id, "42");
        assert_eq!(song.name, "Numeric");
        assert_eq!(song.duration, Some(200));
        assert_eq!(song.play_count, Some(7));
        assert!(song.explicit);
    }
}
