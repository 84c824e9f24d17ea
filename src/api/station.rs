//! Station resolution for song recommendations.
//!
//! JioSaavn keys its recommendations off a server-side "station"
//! created for a seed entity. This module provides the
//! [`StationResolver`] trait and its production implementation, which
//! creates a queue station for a seed song and returns its identifier.

use async_trait::async_trait;
use tracing::debug;

use super::transport::{endpoints, ApiRequest, Transport};
use crate::error::{Result, SaavnError};

/// Resolves a recommendation station for a seed song.
///
/// Injected into [`SuggestionResolver`](super::SuggestionResolver) so
/// tests can substitute a canned implementation.
#[async_trait]
pub trait StationResolver: Send + Sync {
    /// Resolve the station identifier for the given seed song.
    async fn resolve_station(&self, song_id: &str) -> Result<String>;
}

/// Production station resolver backed by the `webradio` API.
#[derive(Debug, Clone)]
pub struct SaavnStationResolver<T> {
    transport: T,
}

impl<T: Transport> SaavnStationResolver<T> {
    /// Create a new resolver over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: Transport> StationResolver for SaavnStationResolver<T> {
    async fn resolve_station(&self, song_id: &str) -> Result<String> {
        // The API expects the entity ID as a JSON-encoded string array
        let entity_id = format!("[\"{}\"]", song_id);
        let request = ApiRequest::new(
            endpoints::STATION_CREATE,
            vec![
                ("entity_id", entity_id),
                ("entity_type", "queue".to_string()),
            ],
        );

        let response = self.transport.request(request).await?;

        let station_id = response
            .data
            .as_ref()
            .and_then(|d| d.get("stationid"))
            .and_then(|s| s.as_str())
            .map(|s| s.to_string());

        match station_id {
            Some(id) => {
                debug!("created station {} for song {}", id, song_id);
                Ok(id)
            }
            None => Err(SaavnError::StationNotCreated(format!(
                "could not create station for song {}",
                song_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::ApiResponse;
    use serde_json::json;
    use std::sync::Mutex;

    struct CannedTransport {
        response: ApiResponse,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl CannedTransport {
        fn new(response: ApiResponse) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_resolve_station_returns_station_id() {
        let transport = CannedTransport::new(ApiResponse {
            data: Some(json!({ "stationid": "station-42" })),
            ok: true,
        });
        let resolver = SaavnStationResolver::new(transport);

        let id = resolver.resolve_station("song-1").await.unwrap();
        assert_eq!(id, "station-42");
    }

    #[tokio::test]
    async fn test_resolve_station_sends_entity_params() {
        let transport = CannedTransport::new(ApiResponse {
            data: Some(json!({ "stationid": "s" })),
            ok: true,
        });
        let resolver = SaavnStationResolver::new(transport);
        resolver.resolve_station("abc").await.unwrap();

        let seen = resolver.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].endpoint, endpoints::STATION_CREATE);
        assert!(seen[0]
            .params
            .contains(&("entity_id", "[\"abc\"]".to_string())));
        assert!(seen[0]
            .params
            .contains(&("entity_type", "queue".to_string())));
    }

    #[tokio::test]
    async fn test_resolve_station_missing_id_fails() {
        let transport = CannedTransport::new(ApiResponse {
            data: Some(json!({ "error": "nope" })),
            ok: true,
        });
        let resolver = SaavnStationResolver::new(transport);

        let err = resolver.resolve_station("song-1").await.unwrap_err();
        assert!(matches!(err, SaavnError::StationNotCreated(_)));
    }

    #[tokio::test]
    async fn test_resolve_station_no_data_fails() {
        let transport = CannedTransport::new(ApiResponse {
            data: None,
            ok: false,
        });
        let resolver = SaavnStationResolver::new(transport);

        let err = resolver.resolve_station("song-1").await.unwrap_err();
        assert!(matches!(err, SaavnError::StationNotCreated(_)));
    }
}
