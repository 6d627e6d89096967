//! TVMaze response types for deserialization.
//!
//! These mirror the JSON returned by the API. Fields we do not use are
//! ignored by serde.

use serde::Deserialize;

/// One entry of the `/search/shows` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub show: ApiShow,
}

/// Show object embedded in a search hit
#[derive(Debug, Clone, Deserialize)]
pub struct ApiShow {
    pub id: u64,
    pub name: String,
    /// HTML summary, null for many smaller shows
    #[serde(default)]
    pub summary: Option<String>,
    /// Artwork, null when the show has none
    #[serde(default)]
    pub image: Option<ApiImage>,
}

/// Artwork URLs; only the medium size is rendered
#[derive(Debug, Clone, Deserialize)]
pub struct ApiImage {
    #[serde(default)]
    pub medium: Option<String>,
}

/// One entry of the `/shows/<id>/episodes` response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEpisode {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub season: u32,
    /// Null for specials
    #[serde(default)]
    pub number: Option<u32>,
}
