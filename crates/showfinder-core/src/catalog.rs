//! Show catalog API
//!
//! Combines the HTTP client with the JSON parsers. Both pipelines are pure
//! request → data transforms; rendering happens elsewhere.

use tracing::debug;

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::{Result, ShowfinderError};
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{Episode, Show, ShowId};
use crate::url::{build_episodes_path, build_search_path, parse_show_id};

/// Search and episode lookups against TVMaze
pub struct ShowCatalog {
    client: TvMazeClient,
}

impl ShowCatalog {
    /// Create a new catalog with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = TvMazeClient::new()?;
        Ok(Self { client })
    }

    /// Create a new catalog with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for shows matching a term
    ///
    /// The term is sent as-is; an empty term is not rejected locally.
    ///
    /// # Returns
    /// Shows in the order the API ranked them, empty if nothing matched
    ///
    /// # Errors
    /// - `HttpError`, `Status` or `NotFound` if the request fails
    /// - `ParseError` if the body is not a search result list
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showfinder_core::Result<()> {
    /// use showfinder_core::ShowCatalog;
    /// let catalog = ShowCatalog::new()?;
    /// for show in catalog.search_shows("batman").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let body = self.client.fetch(&build_search_path(term)).await?;
        let shows = parse_search_results(&body)?;
        debug!(term, count = shows.len(), "search finished");
        Ok(shows)
    }

    /// Get all episodes of a show
    ///
    /// # Returns
    /// Episodes ordered by season and number as the API delivers them
    ///
    /// # Errors
    /// - `NotFound` if the show does not exist
    /// - `HttpError` or `Status` if the request fails
    /// - `ParseError` if the body is not an episode list
    pub async fn get_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
        let body = self.client.fetch(&build_episodes_path(show_id)).await?;
        let episodes = parse_episodes(&body)?;
        debug!(show_id, count = episodes.len(), "episodes fetched");
        Ok(episodes)
    }

    /// Get all episodes of a show identified by a `data-show-id` value
    ///
    /// # Errors
    /// - `InvalidId` if the value is not a show ID; no request is made
    /// - otherwise the same as [`ShowCatalog::get_episodes`]
    pub async fn get_episodes_by_attr(&self, raw_id: &str) -> Result<Vec<Episode>> {
        let show_id = parse_show_id(raw_id)
            .ok_or_else(|| ShowfinderError::InvalidId(raw_id.to_string()))?;
        self.get_episodes(show_id).await
    }
}
