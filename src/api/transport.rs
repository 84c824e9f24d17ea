//! HTTP transport for the JioSaavn API.
//!
//! This module provides the [`Transport`] trait, the request/response
//! shapes it exchanges, and the reqwest-backed [`HttpTransport`] used
//! in production. The trait exists so collaborators built on top of it
//! can be exercised against canned responses in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Base URL for the JioSaavn API.
const API_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

/// Endpoint names understood by the `api.php` dispatcher.
pub mod endpoints {
    /// Fetch suggested songs for a station.
    pub const SONG_SUGGESTIONS: &str = "webradio.getSong";

    /// Create a recommendation station for an entity.
    pub const STATION_CREATE: &str = "webradio.createEntityStation";
}

/// Client context sent with every request.
///
/// The API shapes its responses differently per context; the android
/// context returns the richer `more_info` song payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiContext {
    /// Android app context (API version 4).
    #[default]
    Android,
    /// Desktop web context.
    Web,
}

impl ApiContext {
    /// Get the `ctx` query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiContext::Android => "android",
            ApiContext::Web => "web6dot0",
        }
    }
}

/// A single call against the `api.php` dispatcher.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Endpoint name, one of [`endpoints`].
    pub endpoint: &'static str,
    /// Endpoint-specific query parameters.
    pub params: Vec<(&'static str, String)>,
    /// Client context to impersonate.
    pub context: ApiContext,
}

impl ApiRequest {
    /// Build a request for an endpoint in the android context.
    pub fn new(endpoint: &'static str, params: Vec<(&'static str, String)>) -> Self {
        Self {
            endpoint,
            params,
            context: ApiContext::Android,
        }
    }
}

/// Outcome of a transport call.
///
/// Ordinary not-found conditions are not errors at this layer: they
/// surface as `ok == false` or `data == None`, and it is up to the
/// caller to decide what that means.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Parsed JSON body, if the response carried one.
    pub data: Option<Value>,
    /// Whether the HTTP status signalled success.
    pub ok: bool,
}

/// Request/response transport against the JioSaavn API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one API call.
    ///
    /// Only genuine transport failures (connection errors and the
    /// like) are returned as `Err`; everything else is an
    /// [`ApiResponse`].
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Production transport backed by a reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Create a new transport with a default client.
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Create a transport around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Assemble the full query string for a request.
    fn build_query(request: &ApiRequest) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&'static str, String)> = vec![
            ("__call", request.endpoint.to_string()),
            ("_format", "json".to_string()),
            ("_marker", "0".to_string()),
            ("api_version", "4".to_string()),
            ("ctx", request.context.as_str().to_string()),
        ];
        query.extend(request.params.iter().cloned());
        query
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
        let query = Self::build_query(&request);
        debug!("GET {} __call={}", API_BASE_URL, request.endpoint);

        let response = self.client.get(API_BASE_URL).query(&query).send().await?;
        let ok = response.status().is_success();

        // A body that fails to parse, or parses to null, counts as no data
        let data = response
            .json::<Value>()
            .await
            .ok()
            .filter(|v| !v.is_null());

        Ok(ApiResponse { data, ok })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_dispatcher_params() {
        let request = ApiRequest::new(
            endpoints::SONG_SUGGESTIONS,
            vec![("stationid", "abc".to_string()), ("k", "10".to_string())],
        );
        let query = HttpTransport::build_query(&request);

        assert!(query.contains(&("__call", "webradio.getSong".to_string())));
        assert!(query.contains(&("_format", "json".to_string())));
        assert!(query.contains(&("api_version", "4".to_string())));
        assert!(query.contains(&("ctx", "android".to_string())));
        assert!(query.contains(&("stationid", "abc".to_string())));
        assert!(query.contains(&("k", "10".to_string())));
    }

    #[test]
    fn test_context_strings() {
        assert_eq!(ApiContext::Android.as_str(), "android");
        assert_eq!(ApiContext::Web.as_str(), "web6dot0");
    }
}
