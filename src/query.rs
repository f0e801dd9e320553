//! Query parameters and client-side validation
//!
//! A `Query` is a bag of optional strings the caller fills in. Each operation
//! picks the fields it needs, validates them and turns them into the URL
//! parameters the OMDb API understands. Validation happens before any network
//! traffic, so obviously invalid input never costs a round trip.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Earliest year the API accepts (Roundhay Garden Scene, 1888).
pub const MIN_YEAR: i64 = 1888;

/// Allowed range for the `page` parameter of a free-text search.
pub const PAGE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Errors raised while validating a query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Lookup by identifier without an identifier
    #[error("IMDb ID is missing from the query")]
    MissingImdbId,

    /// Title or search text is required but empty
    #[error("Title is missing from the query")]
    MissingTitle,

    /// Result type filter is not one of movie, series, episode
    #[error("Search type must be blank or one of: movie, series, episode (got '{0}')")]
    InvalidSearchType(String),

    /// Year is not a number
    #[error("Year must be blank or a valid number (got '{0}')")]
    InvalidYear(String),

    /// Year predates the earliest accepted year
    #[error("Year must be blank or not earlier than {MIN_YEAR} (got {0})")]
    YearTooEarly(i64),

    /// Plot length is not short or full
    #[error("Plot must be blank or one of: short, full (got '{0}')")]
    InvalidPlot(String),

    /// Page is not a number
    #[error("Page must be blank or a valid number (got '{0}')")]
    InvalidPage(String),

    /// Page is outside 1..=100
    #[error("Page must be blank or between 1 and 100 inclusive (got {0})")]
    PageOutOfRange(i64),
}

/// The three kinds of record the API distinguishes via its `Type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Movie,
    Series,
    Episode,
}

impl ResultKind {
    /// The wire name used both in `type=` filters and in the `Type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Movie => "movie",
            ResultKind::Series => "series",
            ResultKind::Episode => "episode",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ResultKind::Movie),
            "series" => Ok(ResultKind::Series),
            "episode" => Ok(ResultKind::Episode),
            other => Err(QueryError::InvalidSearchType(other.to_string())),
        }
    }
}

/// Length of the plot text returned by a title lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLength {
    Short,
    Full,
}

impl PlotLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotLength::Short => "short",
            PlotLength::Full => "full",
        }
    }
}

impl FromStr for PlotLength {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(PlotLength::Short),
            "full" => Ok(PlotLength::Full),
            other => Err(QueryError::InvalidPlot(other.to_string())),
        }
    }
}

/// Caller supplied search parameters
///
/// Every field is optional. Which ones are required depends on the operation:
/// lookups by identifier need `imdb_id`, title lookups and free-text searches
/// need `title`. Fields an operation does not use are ignored.
///
/// # Examples
///
/// ```
/// use omdb_client::Query;
///
/// let query = Query::by_title("Blade Runner").year("1982").plot("full");
/// assert_eq!(query.title.as_deref(), Some("Blade Runner"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub title: Option<String>,
    pub year: Option<String>,
    pub imdb_id: Option<String>,
    pub search_type: Option<String>,
    pub plot: Option<String>,
    pub page: Option<String>,
}

impl Query {
    /// Creates a query for a lookup by IMDb identifier
    pub fn by_id(imdb_id: impl Into<String>) -> Self {
        Self {
            imdb_id: Some(imdb_id.into()),
            ..Self::default()
        }
    }

    /// Creates a query carrying a title (or free-text search term)
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn search_type(mut self, search_type: impl Into<String>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    pub fn plot(mut self, plot: impl Into<String>) -> Self {
        self.plot = Some(plot.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Validates the query for a lookup by identifier and returns its parameters
    ///
    /// Only the identifier is sent; every other field is ignored since the
    /// identifier is unique.
    pub(crate) fn id_params(&self) -> Result<Vec<(&'static str, String)>, QueryError> {
        let imdb_id = present(&self.imdb_id).ok_or(QueryError::MissingImdbId)?;
        Ok(vec![("i", imdb_id.to_string())])
    }

    /// Validates the query for a lookup by exact title and returns its parameters
    pub(crate) fn title_params(&self) -> Result<Vec<(&'static str, String)>, QueryError> {
        let title = present(&self.title).ok_or(QueryError::MissingTitle)?;
        let mut params = vec![("t", title.to_string())];

        self.push_type_and_year(&mut params)?;

        if let Some(plot) = present(&self.plot) {
            let plot: PlotLength = plot.parse()?;
            params.push(("plot", plot.as_str().to_string()));
        }

        Ok(params)
    }

    /// Validates the query for a free-text search and returns its parameters
    pub(crate) fn search_params(&self) -> Result<Vec<(&'static str, String)>, QueryError> {
        let text = present(&self.title).ok_or(QueryError::MissingTitle)?;
        let mut params = vec![("s", text.to_string())];

        self.push_type_and_year(&mut params)?;

        if let Some(page) = present(&self.page) {
            validate_page(page)?;
            params.push(("page", page.to_string()));
        }

        Ok(params)
    }

    fn push_type_and_year(
        &self,
        params: &mut Vec<(&'static str, String)>,
    ) -> Result<(), QueryError> {
        if let Some(search_type) = present(&self.search_type) {
            let kind: ResultKind = search_type.parse()?;
            params.push(("type", kind.as_str().to_string()));
        }

        if let Some(year) = present(&self.year) {
            validate_year(year)?;
            params.push(("y", year.to_string()));
        }

        Ok(())
    }
}

/// Treats `None` and empty strings alike
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn validate_year(year: &str) -> Result<(), QueryError> {
    let value: i64 = year
        .parse()
        .map_err(|_| QueryError::InvalidYear(year.to_string()))?;

    if value < MIN_YEAR {
        return Err(QueryError::YearTooEarly(value));
    }

    Ok(())
}

fn validate_page(page: &str) -> Result<(), QueryError> {
    let value: i64 = page
        .parse()
        .map_err(|_| QueryError::InvalidPage(page.to_string()))?;

    if !PAGE_RANGE.contains(&value) {
        return Err(QueryError::PageOutOfRange(value));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_params_requires_identifier() {
        assert_eq!(Query::default().id_params(), Err(QueryError::MissingImdbId));
        assert_eq!(Query::by_id("").id_params(), Err(QueryError::MissingImdbId));
    }

    #[test]
    fn test_id_params_ignores_other_fields() {
        let query = Query::by_id("tt0083658").year("1700").search_type("bogus");
        assert_eq!(
            query.id_params().unwrap(),
            vec![("i", "tt0083658".to_string())]
        );
    }

    #[test]
    fn test_title_required() {
        assert_eq!(Query::default().title_params(), Err(QueryError::MissingTitle));
        assert_eq!(Query::by_id("tt1").search_params(), Err(QueryError::MissingTitle));
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(
            Query::by_title("x").year("1887").title_params(),
            Err(QueryError::YearTooEarly(1887))
        );
        assert!(Query::by_title("x").year("1888").title_params().is_ok());
        assert_eq!(
            Query::by_title("x").year("nineteen").search_params(),
            Err(QueryError::InvalidYear("nineteen".to_string()))
        );
    }

    #[test]
    fn test_page_boundaries() {
        assert_eq!(
            Query::by_title("x").page("0").search_params(),
            Err(QueryError::PageOutOfRange(0))
        );
        assert_eq!(
            Query::by_title("x").page("101").search_params(),
            Err(QueryError::PageOutOfRange(101))
        );
        assert!(Query::by_title("x").page("1").search_params().is_ok());
        assert!(Query::by_title("x").page("100").search_params().is_ok());
        assert_eq!(
            Query::by_title("x").page("two").search_params(),
            Err(QueryError::InvalidPage("two".to_string()))
        );
    }

    #[test]
    fn test_search_type_and_plot_filters() {
        assert_eq!(
            Query::by_title("x").search_type("game").title_params(),
            Err(QueryError::InvalidSearchType("game".to_string()))
        );
        assert_eq!(
            Query::by_title("x").plot("medium").title_params(),
            Err(QueryError::InvalidPlot("medium".to_string()))
        );
        for kind in ["movie", "series", "episode"] {
            assert!(Query::by_title("x").search_type(kind).search_params().is_ok());
        }
    }

    #[test]
    fn test_only_supplied_parameters_are_sent() {
        let params = Query::by_title("Alien")
            .search_type("movie")
            .year("1979")
            .plot("short")
            .page("3")
            .title_params()
            .unwrap();

        assert_eq!(
            params,
            vec![
                ("t", "Alien".to_string()),
                ("type", "movie".to_string()),
                ("y", "1979".to_string()),
                ("plot", "short".to_string()),
            ]
        );

        let params = Query::by_title("Alien").year("").search_params().unwrap();
        assert_eq!(params, vec![("s", "Alien".to_string())]);
    }
}
