//! Episode list parser for TVMaze
//!
//! Parses the `/shows/<id>/episodes` JSON body. The API already orders
//! episodes by season and number, so no sorting happens here.

use crate::error::Result;
use crate::parser::api::ApiEpisode;
use crate::types::Episode;

/// Parses an episodes response body and returns the episodes in API order
///
/// # Errors
/// Returns `ParseError` if the body is not a list of episodes
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let entries: Vec<ApiEpisode> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(episode_from_api).collect())
}

/// Projects a single API episode onto an `Episode`
pub fn episode_from_api(entry: ApiEpisode) -> Episode {
    Episode {
        id: entry.id,
        name: entry.name.unwrap_or_default(),
        season: entry.season,
        number: entry.number,
    }
}
