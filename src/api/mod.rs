//! API building blocks for JioSaavn.
//!
//! This module provides the layers of the suggestion pipeline:
//! - [`Transport`]/[`HttpTransport`]: the raw `api.php` transport
//! - [`StationResolver`]/[`SaavnStationResolver`]: station creation
//! - [`SuggestionResolver`]: the suggestion pipeline itself

pub mod station;
pub mod suggestions;
pub mod transport;

pub use station::{SaavnStationResolver, StationResolver};
pub use suggestions::{SuggestionRequest, SuggestionResolver};
pub use transport::{ApiContext, ApiRequest, ApiResponse, HttpTransport, Transport};
