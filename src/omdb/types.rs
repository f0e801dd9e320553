//! OMDb API response types for deserialization.
//!
//! These structures mirror the JSON response format of the OMDb API. The
//! service returns every value as a string (`"N/A"` when unknown); fields the
//! payload omits decode to empty values instead of failing.
use crate::query::ResultKind;
use serde::{Deserialize, Serialize};

/// Minimal view of a lookup response used to pick the full decode target.
///
/// Only the discriminator and status fields are declared; serde skips the
/// rest of the payload.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope {
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: String,
}

impl Envelope {
    /// The API reports failures with `"Response": "False"`
    pub fn is_failure(&self) -> bool {
        self.response == "False"
    }
}

/// A rating from a single source (IMDb, Rotten Tomatoes, Metacritic, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Fields shared by movies, series and episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Details {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// A single movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieResult {
    #[serde(flatten)]
    pub details: Details,
    #[serde(rename = "DVD", default)]
    pub dvd: String,
    #[serde(default)]
    pub box_office: String,
    #[serde(default)]
    pub production: String,
    #[serde(default)]
    pub website: String,
}

/// A single series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    #[serde(flatten)]
    pub details: Details,
    #[serde(rename = "totalSeasons", default)]
    pub total_seasons: String,
}

/// A single episode of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    #[serde(flatten)]
    pub details: Details,
    /// IMDb identifier of the series this episode belongs to
    #[serde(rename = "seriesID", default)]
    pub series_id: String,
    #[serde(rename = "Season", default)]
    pub season: String,
    #[serde(rename = "Episode", default)]
    pub episode: String,
}

/// The outcome of a lookup: exactly one of the three record kinds.
///
/// Serializes back to the wire shape, with the kind in a `Type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Type", rename_all = "lowercase")]
pub enum LookupResult {
    Movie(MovieResult),
    Series(SeriesResult),
    Episode(EpisodeResult),
}

impl LookupResult {
    /// The fields every record kind carries
    pub fn details(&self) -> &Details {
        match self {
            LookupResult::Movie(movie) => &movie.details,
            LookupResult::Series(series) => &series.details,
            LookupResult::Episode(episode) => &episode.details,
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            LookupResult::Movie(_) => ResultKind::Movie,
            LookupResult::Series(_) => ResultKind::Series,
            LookupResult::Episode(_) => ResultKind::Episode,
        }
    }
}

/// A lightweight summary returned by free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchResult {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
}

/// One page of free-text search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchResponse {
    pub search: Vec<SearchResult>,
    /// Total number of matches across all pages, as reported by the API
    #[serde(rename = "totalResults")]
    pub total_results: String,
    pub response: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl SearchResponse {
    pub fn is_failure(&self) -> bool {
        self.response == "False"
    }
}
