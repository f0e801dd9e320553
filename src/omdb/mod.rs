/// Client and result types for the OMDb metadata API.
///
/// This module provides the `OmdbClient` that talks to the service, the typed
/// results it decodes responses into, and the `MetadataLookup` trait the
/// client is used through.
mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, OmdbClient};
pub use types::{
    Details, EpisodeResult, LookupResult, MovieResult, Rating, SearchResponse, SearchResult,
    SeriesResult,
};

use crate::query::{Query, QueryError};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while querying the OMDb API.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// The client is not usable as configured (missing key, bad base URL)
    #[error("Client misconfigured: {0}")]
    Configuration(String),

    /// The query was rejected before sending anything
    #[error("Invalid query: {0}")]
    Validation(#[from] QueryError),

    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("Unexpected HTTP status {}", format_status(.0))]
    UnexpectedStatus(StatusCode),

    /// The response body is not the JSON we expected
    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API itself reported a failure
    #[error("Error from OMDb API: {0}")]
    Api(String),
}

fn format_status(status: &StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// Operations offered by a movie/series/episode metadata source.
///
/// Each call is a single synchronous round trip, independent of previous calls.
pub trait MetadataLookup {
    /// Looks up a record by its unique IMDb identifier.
    ///
    /// Only `query.imdb_id` is used. Returns `Ok(None)` when the service answers
    /// with a record kind other than movie, series or episode.
    fn lookup_by_id(&self, query: &Query) -> Result<Option<LookupResult>, OmdbError>;

    /// Looks up a record by its exact title.
    ///
    /// Uses `title` (required), `search_type`, `year` and `plot`.
    fn lookup_by_title(&self, query: &Query) -> Result<Option<LookupResult>, OmdbError>;

    /// Searches by free text, returning one page of summaries.
    ///
    /// Uses `title` (required, as the search term), `search_type`, `year` and `page`.
    fn search_by_text(&self, query: &Query) -> Result<SearchResponse, OmdbError>;
}
