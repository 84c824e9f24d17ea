//! Song suggestion resolution.
//!
//! This module implements the suggestion pipeline: resolve a station
//! for the seed song, fetch suggestions from the `webradio` endpoint,
//! normalize the response (the API answers in two different shapes),
//! and map the surviving entries into canonical [`Song`] records.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::station::StationResolver;
use super::transport::{endpoints, ApiRequest, ApiResponse, Transport};
use crate::converters;
use crate::error::{Result, SaavnError};
use crate::models::Song;

/// Key under which the suggestions endpoint echoes the station ID back
/// in map-shaped responses.
const STATION_ECHO_KEY: &str = "stationid";

/// Arguments for one suggestion lookup.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    /// Seed song ID. Must be non-empty.
    pub song_id: String,
    /// Maximum number of suggestions to return. Must be positive.
    pub limit: usize,
}

impl SuggestionRequest {
    /// Build a request for a seed song.
    pub fn new<S: Into<String>>(song_id: S, limit: usize) -> Self {
        Self {
            song_id: song_id.into(),
            limit,
        }
    }
}

/// Wire shape of the suggestions response.
///
/// The endpoint answers either with an object holding a `suggestions`
/// array, or with a flat object mapping opaque keys to suggestion
/// entries (plus the echoed station ID). The list shape is tried
/// first; anything that is neither fails the decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionPayload {
    List { suggestions: Vec<Value> },
    Keyed(Map<String, Value>),
}

impl SuggestionPayload {
    /// Flatten into the ordered raw entry list.
    ///
    /// Keyed responses keep their wire order (serde_json is built with
    /// `preserve_order`), minus the echoed station ID.
    fn into_entries(self) -> Vec<Value> {
        match self {
            SuggestionPayload::List { suggestions } => suggestions,
            SuggestionPayload::Keyed(map) => map
                .into_iter()
                .filter(|(key, _)| key != STATION_ECHO_KEY)
                .map(|(_, value)| value)
                .collect(),
        }
    }
}

/// Resolve the song object inside a raw suggestion entry.
///
/// Some responses wrap the song under a `song` field, others hand the
/// song object out directly. Entries whose resolved object lacks a
/// string `id` are invalid and yield `None`.
fn resolve_song_object(entry: &Value) -> Option<&Value> {
    let song = match entry.get("song") {
        Some(inner) if !inner.is_null() => inner,
        _ => entry,
    };

    match song.get("id") {
        Some(Value::String(_)) => Some(song),
        _ => None,
    }
}

/// Resolves song suggestions for a seed track.
///
/// Holds no state beyond its injected collaborators, so one instance
/// can serve concurrent lookups as long as the collaborators can.
#[derive(Debug)]
pub struct SuggestionResolver<S, T> {
    stations: S,
    transport: T,
}

impl<S: StationResolver, T: Transport> SuggestionResolver<S, T> {
    /// Create a resolver over the given station resolver and transport.
    pub fn new(stations: S, transport: T) -> Self {
        Self {
            stations,
            transport,
        }
    }

    /// Resolve up to `request.limit` suggested songs for the seed song.
    ///
    /// Individually malformed entries are discarded without failing the
    /// call; fewer results than requested (including zero) is success.
    ///
    /// # Errors
    ///
    /// Station resolution failures propagate unchanged. A fetch that
    /// signals failure or carries no data fails with
    /// [`SaavnError::SuggestionsNotFound`].
    pub async fn resolve(&self, request: &SuggestionRequest) -> Result<Vec<Song>> {
        let station_id = self.stations.resolve_station(&request.song_id).await?;

        let response = self
            .transport
            .request(ApiRequest::new(
                endpoints::SONG_SUGGESTIONS,
                vec![
                    ("stationid", station_id),
                    ("k", request.limit.to_string()),
                ],
            ))
            .await?;

        let data = match response {
            ApiResponse {
                ok: true,
                data: Some(data),
            } if !data.is_null() => data,
            _ => {
                return Err(SaavnError::SuggestionsNotFound(
                    "no suggestions found for the given song".to_string(),
                ))
            }
        };

        let payload: SuggestionPayload = serde_json::from_value(data)?;
        let entries = payload.into_entries();
        debug!(
            "normalized {} raw suggestion entries for song {}",
            entries.len(),
            request.song_id
        );

        let songs = entries
            .iter()
            .filter_map(resolve_song_object)
            .take(request.limit)
            .map(converters::parse_song)
            .collect();

        Ok(songs)
    }
}
