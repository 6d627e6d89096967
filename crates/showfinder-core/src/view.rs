//! UI adapter for the show pipelines
//!
//! [`ShowsView`] is the seam between the controller and whatever renders
//! the results. [`MarkupView`] is the stock implementation: it keeps the
//! rendered HTML in memory and hands it to a web front end as a
//! [`ViewSnapshot`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{render_episode, render_show};
use crate::types::{Episode, Show};

/// Rendering target for search results and episode lists
pub trait ShowsView {
    /// Hide the episodes area (`#episodesArea`)
    fn hide_episodes_area(&mut self);

    /// Replace every rendered show with one block per show, in order
    fn populate_shows(&mut self, shows: &[Show]) -> Result<()>;

    /// Remove all items from the episodes list
    fn clear_episodes(&mut self);

    /// Append one item per episode; the episodes area is revealed once at
    /// least one item has been appended
    fn populate_episodes(&mut self, episodes: &[Episode]) -> Result<()>;

    /// Display a failure to the user
    fn show_error(&mut self, message: &str);

    /// Remove a previously displayed failure
    fn clear_error(&mut self);
}

/// Serializable state of a [`MarkupView`] for Tauri front ends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Markup for `#showsList`
    pub shows_html: String,
    /// Markup for `#episodesList`
    pub episodes_html: String,
    /// Whether `#episodesArea` is shown
    pub episodes_visible: bool,
    /// Error message to display, if the last pipeline run failed
    pub error: Option<String>,
}

/// In-memory HTML view
#[derive(Debug, Default)]
pub struct MarkupView {
    show_blocks: Vec<String>,
    episode_items: Vec<String>,
    episodes_visible: bool,
    error: Option<String>,
}

impl MarkupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rendered show blocks
    pub fn show_count(&self) -> usize {
        self.show_blocks.len()
    }

    /// Number of rendered episode items
    pub fn episode_count(&self) -> usize {
        self.episode_items.len()
    }

    pub fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Markup of the results container
    pub fn shows_html(&self) -> String {
        self.show_blocks.join("\n")
    }

    /// Markup of the episodes list
    pub fn episodes_html(&self) -> String {
        self.episode_items.join("\n")
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            shows_html: self.shows_html(),
            episodes_html: self.episodes_html(),
            episodes_visible: self.episodes_visible,
            error: self.error.clone(),
        }
    }
}

impl ShowsView for MarkupView {
    fn hide_episodes_area(&mut self) {
        self.episodes_visible = false;
    }

    fn populate_shows(&mut self, shows: &[Show]) -> Result<()> {
        let blocks = shows.iter().map(render_show).collect::<Result<Vec<_>>>()?;
        self.show_blocks = blocks;
        Ok(())
    }

    fn clear_episodes(&mut self) {
        self.episode_items.clear();
    }

    fn populate_episodes(&mut self, episodes: &[Episode]) -> Result<()> {
        let items = episodes
            .iter()
            .map(render_episode)
            .collect::<Result<Vec<_>>>()?;
        if !items.is_empty() {
            self.episode_items.extend(items);
            self.episodes_visible = true;
        }
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}
