//! OMDb API client implementation.
use super::types::{
    Envelope, EpisodeResult, LookupResult, MovieResult, SearchResponse, SeriesResult,
};
use super::{MetadataLookup, OmdbError};
use crate::query::{Query, ResultKind};
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

/// Endpoint used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Client for the OMDb API.
///
/// The HTTP client is supplied by the caller, who keeps control over its
/// configuration (timeouts, proxies, TLS). `reqwest::blocking::Client` is
/// reference counted, so passing a clone shares the same connection pool.
///
/// # Examples
///
/// ```no_run
/// use omdb_client::{MetadataLookup, OmdbClient, Query};
///
/// let client = OmdbClient::new("my-api-key", reqwest::blocking::Client::new());
/// let result = client.lookup_by_id(&Query::by_id("tt0083658"))?;
/// # Ok::<(), omdb_client::OmdbError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    http: reqwest::blocking::Client,
    base_url: String,
}

impl OmdbClient {
    /// Creates a new client talking to the public OMDb endpoint.
    pub fn new(api_key: impl Into<String>, http: reqwest::blocking::Client) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET request with the given parameters plus the API key.
    ///
    /// Returns the raw body of a 200 response; the response itself is
    /// released before returning.
    fn request(&self, mut params: Vec<(&'static str, String)>) -> Result<Vec<u8>, OmdbError> {
        if self.api_key.is_empty() {
            return Err(OmdbError::Configuration("missing OMDb API key".to_string()));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            OmdbError::Configuration(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        debug!(url = %url, ?params, "Sending OMDb request");

        params.push(("apikey", self.api_key.clone()));

        let response = self.http.get(url).query(&params).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OmdbError::UnexpectedStatus(status));
        }

        let body = response.bytes()?;
        debug!(bytes = body.len(), "Received OMDb response");

        Ok(body.to_vec())
    }

    /// Decodes a lookup response: envelope first, then the concrete record.
    fn decode_lookup(data: &[u8]) -> Result<Option<LookupResult>, OmdbError> {
        let envelope: Envelope = serde_json::from_slice(data)?;

        if envelope.is_failure() {
            return Err(OmdbError::Api(envelope.error));
        }

        let kind = match envelope.kind.parse::<ResultKind>() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(kind = %envelope.kind, "OMDb returned an unknown record type, ignoring it");
                return Ok(None);
            }
        };

        let result = match kind {
            ResultKind::Movie => LookupResult::Movie(serde_json::from_slice::<MovieResult>(data)?),
            ResultKind::Series => {
                LookupResult::Series(serde_json::from_slice::<SeriesResult>(data)?)
            }
            ResultKind::Episode => {
                LookupResult::Episode(serde_json::from_slice::<EpisodeResult>(data)?)
            }
        };

        Ok(Some(result))
    }
}

impl MetadataLookup for OmdbClient {
    fn lookup_by_id(&self, query: &Query) -> Result<Option<LookupResult>, OmdbError> {
        let params = query.id_params()?;
        let data = self.request(params)?;
        Self::decode_lookup(&data)
    }

    fn lookup_by_title(&self, query: &Query) -> Result<Option<LookupResult>, OmdbError> {
        let params = query.title_params()?;
        let data = self.request(params)?;
        Self::decode_lookup(&data)
    }

    fn search_by_text(&self, query: &Query) -> Result<SearchResponse, OmdbError> {
        let params = query.search_params()?;
        let data = self.request(params)?;

        // Search responses share one shape, no envelope pass needed
        let response: SearchResponse = serde_json::from_slice(&data)?;

        if response.is_failure() {
            return Err(OmdbError::Api(response.error));
        }

        Ok(response)
    }
}
