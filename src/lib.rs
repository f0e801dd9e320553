//! omdb_client - Typed access to the OMDb movie, series and episode API
//!
//! This library validates query parameters, issues the HTTP request and
//! decodes the JSON answer into the matching result type. Lookups return one
//! of `MovieResult`, `SeriesResult` or `EpisodeResult` depending on the `Type`
//! the service reports; free-text searches return a `SearchResponse`.
//!
//! # Examples
//!
//! ```no_run
//! use omdb_client::{LookupResult, MetadataLookup, OmdbClient, Query};
//!
//! let client = OmdbClient::new("my-api-key", reqwest::blocking::Client::new());
//!
//! match client.lookup_by_title(&Query::by_title("Dark").search_type("series"))? {
//!     Some(LookupResult::Series(series)) => {
//!         println!("{} has {} seasons", series.details.title, series.total_seasons);
//!     }
//!     Some(other) => println!("Found a {}", other.kind()),
//!     None => println!("Unknown record type"),
//! }
//!
//! let page = client.search_by_text(&Query::by_title("Alien").page("1"))?;
//! for hit in &page.search {
//!     println!("{} ({}) {}", hit.title, hit.year, hit.imdb_id);
//! }
//! # Ok::<(), omdb_client::OmdbError>(())
//! ```

mod omdb;
mod query;

pub use omdb::{
    DEFAULT_BASE_URL, Details, EpisodeResult, LookupResult, MetadataLookup, MovieResult,
    OmdbClient, OmdbError, Rating, SearchResponse, SearchResult, SeriesResult,
};
pub use query::{MIN_YEAR, PAGE_RANGE, PlotLength, Query, QueryError, ResultKind};
