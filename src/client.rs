//! Unified JioSaavn client.
//!
//! This module provides a high-level, easy-to-use interface for
//! fetching song suggestions, wiring the HTTP transport and station
//! resolver together with production defaults.

use crate::api::{
    HttpTransport, SaavnStationResolver, StationResolver, SuggestionRequest, SuggestionResolver,
};
use crate::error::Result;
use crate::models::Song;

/// Main JioSaavn client.
///
/// # Example
///
/// ```rust,no_run
/// use rusaavn::SaavnClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SaavnClient::new();
///
///     let suggestions = client.get_song_suggestions("5WXAlMNt", 10).await?;
///     for song in &suggestions {
///         println!("{} - {}", song.name, song.artists_string(", "));
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SaavnClient {
    stations: SaavnStationResolver<HttpTransport>,
    resolver: SuggestionResolver<SaavnStationResolver<HttpTransport>, HttpTransport>,
}

impl Default for SaavnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SaavnClient {
    /// Create a new client with a default HTTP transport.
    pub fn new() -> Self {
        let transport = HttpTransport::new();
        let stations = SaavnStationResolver::new(transport.clone());
        let resolver = SuggestionResolver::new(stations.clone(), transport);

        Self { stations, resolver }
    }

    /// Get up to `limit` suggested songs for a seed song.
    ///
    /// Creates (or reuses, server-side) a recommendation station for
    /// the seed song and resolves its suggestions.
    pub async fn get_song_suggestions(&self, song_id: &str, limit: usize) -> Result<Vec<Song>> {
        self.resolver
            .resolve(&SuggestionRequest::new(song_id, limit))
            .await
    }

    /// Create a recommendation station for a seed song and return its
    /// identifier.
    pub async fn create_song_station(&self, song_id: &str) -> Result<String> {
        self.stations.resolve_station(song_id).await
    }
}
