//! URL helper functions for the TVMaze API
//!
//! Request paths for the search and episode endpoints, show ID parsing,
//! and the fallback image used for shows without artwork.

use crate::types::ShowId;

/// Base URL of the public TVMaze API
pub const BASE_URL: &str = "https://api.tvmaze.com";

/// Image shown for shows that have no artwork on TVMaze
pub const PLACEHOLDER_IMAGE_URL: &str = "https://store-images.s-microsoft.com/image/apps.65316.13510798887490672.6e1ebb25-96c8-4504-b714-1f7cbca3c5ad.f9514a23-1eb8-4916-a18e-99b1a9817d15?mode=scale&q=90&h=300&w=300";

/// Builds the search path for a given term
///
/// The term is URL encoded but otherwise sent as-is, including the empty term.
///
/// # Example
/// ```
/// use showfinder_core::url::build_search_path;
/// assert_eq!(build_search_path("doctor who"), "/search/shows?q=doctor%20who");
/// ```
pub fn build_search_path(term: &str) -> String {
    format!("/search/shows?q={}", urlencoding::encode(term))
}

/// Builds the episodes path for a show
///
/// # Example
/// ```
/// use showfinder_core::url::build_episodes_path;
/// assert_eq!(build_episodes_path(1), "/shows/1/episodes");
/// ```
pub fn build_episodes_path(show_id: ShowId) -> String {
    format!("/shows/{}/episodes", show_id)
}

/// Parses a show ID as it appears in a `data-show-id` attribute
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is
/// not a non-negative integer.
///
/// # Example
/// ```
/// use showfinder_core::url::parse_show_id;
/// assert_eq!(parse_show_id(" 42 "), Some(42));
/// assert_eq!(parse_show_id("42a"), None);
/// ```
pub fn parse_show_id(raw: &str) -> Option<ShowId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
