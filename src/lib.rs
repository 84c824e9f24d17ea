//! # Rusaavn
//!
//! A Rust library for fetching song recommendations from JioSaavn.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`SaavnClient`] struct:
//!
//! ```rust,no_run
//! use rusaavn::SaavnClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SaavnClient::new();
//!
//!     // Fetch up to 10 suggestions for a seed song
//!     let songs = client.get_song_suggestions("5WXAlMNt", 10).await?;
//!     for song in &songs {
//!         println!("{} - {}", song.name, song.artists_string(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! JioSaavn keys recommendations off a server-side "station" created
//! for a seed song. The client first creates such a station, then asks
//! the `webradio` endpoint for suggestions against it, and finally
//! normalizes the response (the endpoint answers in two different
//! shapes) into a uniform list of [`Song`] records.
//!
//! ## Low-Level APIs
//!
//! For more control, or to substitute collaborators in tests, the
//! building blocks are public:
//!
//! - [`api::SuggestionResolver`] - the suggestion pipeline, generic over
//!   its station resolver and transport
//! - [`api::SaavnStationResolver`] - station creation
//! - [`api::HttpTransport`] - the raw `api.php` transport

pub mod api;
mod client;
pub mod converters;
pub mod error;
pub mod models;

// Main interface (recommended)
pub use client::SaavnClient;

// Low-level APIs
pub use api::{SuggestionRequest, SuggestionResolver};
pub use error::SaavnError;
pub use models::Song;
