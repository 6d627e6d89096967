//! HTML markup for shows and episodes
//!
//! Produces the blocks the web front end inserts into `#showsList` and
//! `#episodesList`. Templates escape every value except the show summary,
//! which TVMaze delivers as HTML.

use askama::Template;

use crate::error::Result;
use crate::types::{Episode, Show};

#[derive(Template)]
#[template(path = "show.html")]
struct ShowBlock<'a> {
    show: &'a Show,
}

#[derive(Template)]
#[template(source = "<li>{{ line }}</li>", ext = "html")]
struct EpisodeItem {
    line: String,
}

/// Renders one show block
///
/// The block carries `data-show-id` and a `.Show-getEpisodes` trigger.
pub fn render_show(show: &Show) -> Result<String> {
    Ok(ShowBlock { show }.render()?)
}

/// Text of one episode entry, e.g. `Episode: Pilot, Season: 1, Number: 1`
///
/// Specials without a number read `Number: n/a`.
pub fn episode_line(episode: &Episode) -> String {
    let number = match episode.number {
        Some(n) => n.to_string(),
        None => "n/a".to_string(),
    };
    format!(
        "Episode: {}, Season: {}, Number: {}",
        episode.name, episode.season, number
    )
}

/// Renders one episode list item
pub fn render_episode(episode: &Episode) -> Result<String> {
    Ok(EpisodeItem {
        line: episode_line(episode),
    }
    .render()?)
}
