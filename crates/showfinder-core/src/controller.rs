//! Controller driving both pipelines into a view
//!
//! Owns the catalog, the injected [`ShowsView`] and the map from show ID to
//! the last fetched data. Every pipeline run takes a generation token before
//! its request; a response whose token was superseded in the meantime is
//! dropped without touching the view.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::catalog::ShowCatalog;
use crate::error::{Result, ShowfinderError};
use crate::types::{Episode, Show, ShowId};
use crate::url::parse_show_id;
use crate::view::ShowsView;

/// What a pipeline run did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The view now shows this many shows or episodes
    Rendered(usize),
    /// A newer run started before this one's response arrived
    Superseded,
}

struct ControllerState<V> {
    view: V,
    shows: Vec<Show>,
    episodes: HashMap<ShowId, Vec<Episode>>,
}

/// Search and episode-expansion handler for one view
pub struct ShowController<V> {
    catalog: ShowCatalog,
    state: Mutex<ControllerState<V>>,
    search_generation: AtomicU64,
    episodes_generation: AtomicU64,
}

impl<V: ShowsView> ShowController<V> {
    pub fn new(catalog: ShowCatalog, view: V) -> Self {
        Self {
            catalog,
            state: Mutex::new(ControllerState {
                view,
                shows: Vec::new(),
                episodes: HashMap::new(),
            }),
            search_generation: AtomicU64::new(0),
            episodes_generation: AtomicU64::new(0),
        }
    }

    /// Handle a search submission
    ///
    /// Fetches shows for `term`, hides the episodes area and renders the
    /// results. Applying the results supersedes every episode expansion
    /// started before, so a late episode list never shows up under the new
    /// results. A failed search leaves in-flight expansions alone.
    ///
    /// # Errors
    /// Any catalog or render error. It is also shown in the view; the
    /// previously rendered shows stay in place.
    pub async fn search_and_display(&self, term: &str) -> Result<RenderOutcome> {
        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.catalog.search_shows(term).await;

        let mut state = self.state.lock().await;
        if self.search_generation.load(Ordering::SeqCst) != generation {
            debug!(term, generation, "dropping superseded search response");
            return Ok(RenderOutcome::Superseded);
        }

        let shows = match result {
            Ok(shows) => shows,
            Err(e) => {
                warn!(term, error = %e, "search failed");
                state.view.show_error(&e.to_string());
                return Err(e);
            }
        };

        info!(term, count = shows.len(), "rendering search results");
        self.episodes_generation.fetch_add(1, Ordering::SeqCst);
        state.view.clear_error();
        state.view.hide_episodes_area();
        state.episodes.clear();
        if let Err(e) = state.view.populate_shows(&shows) {
            warn!(term, error = %e, "rendering search results failed");
            state.view.show_error(&e.to_string());
            return Err(e);
        }
        state.shows = shows;
        Ok(RenderOutcome::Rendered(state.shows.len()))
    }

    /// Handle a click on a show's "Episodes" control
    ///
    /// Replaces the episodes list with the episodes of `show_id`. The
    /// episodes area is revealed when the show has at least one episode and
    /// hidden otherwise.
    ///
    /// # Errors
    /// Any catalog or render error, also shown in the view.
    pub async fn expand_episodes(&self, show_id: ShowId) -> Result<RenderOutcome> {
        let generation = self.episodes_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.catalog.get_episodes(show_id).await;

        let mut state = self.state.lock().await;
        if self.episodes_generation.load(Ordering::SeqCst) != generation {
            debug!(show_id, generation, "dropping superseded episodes response");
            return Ok(RenderOutcome::Superseded);
        }

        let episodes = match result {
            Ok(episodes) => episodes,
            Err(e) => {
                warn!(show_id, error = %e, "episode lookup failed");
                state.view.show_error(&e.to_string());
                return Err(e);
            }
        };

        if !state.shows.iter().any(|show| show.id == show_id) {
            debug!(show_id, "expanding a show outside the current results");
        }
        state.view.clear_error();
        state.view.clear_episodes();
        if episodes.is_empty() {
            state.view.hide_episodes_area();
        }
        if let Err(e) = state.view.populate_episodes(&episodes) {
            warn!(show_id, error = %e, "rendering episodes failed");
            state.view.show_error(&e.to_string());
            return Err(e);
        }
        let count = episodes.len();
        state.episodes.insert(show_id, episodes);
        Ok(RenderOutcome::Rendered(count))
    }

    /// Like [`ShowController::expand_episodes`], for a raw `data-show-id` value
    ///
    /// # Errors
    /// `InvalidId` if the value is not a show ID; no request is made.
    pub async fn expand_episodes_for(&self, raw_id: &str) -> Result<RenderOutcome> {
        match parse_show_id(raw_id) {
            Some(show_id) => self.expand_episodes(show_id).await,
            None => {
                let e = ShowfinderError::InvalidId(raw_id.to_string());
                warn!(raw_id, "rejecting show id");
                self.state.lock().await.view.show_error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Shows from the last applied search, in API order
    pub async fn shows(&self) -> Vec<Show> {
        self.state.lock().await.shows.clone()
    }

    /// Show with `show_id` from the last applied search
    pub async fn show(&self, show_id: ShowId) -> Option<Show> {
        let state = self.state.lock().await;
        state.shows.iter().find(|show| show.id == show_id).cloned()
    }

    /// Episodes last fetched for `show_id` since the last search
    pub async fn episodes(&self, show_id: ShowId) -> Option<Vec<Episode>> {
        self.state.lock().await.episodes.get(&show_id).cloned()
    }

    /// Run `f` against the view
    pub async fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let state = self.state.lock().await;
        f(&state.view)
    }
}
