//! Showfinder Tauri Integration
//!
//! Provides a Tauri plugin that drives the showfinder pipelines from a
//! webview front end.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showfinder_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend and insert the returned markup
//! (see `frontend/index.html` for the full page):
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const view = await invoke('plugin:showfinder|search_shows', { term: 'batman' });
//! document.querySelector('#showsList').innerHTML = view.showsHtml;
//!
//! const episodes = await invoke('plugin:showfinder|get_episodes', { showId: '975' });
//! document.querySelector('#episodesList').innerHTML = episodes.episodesHtml;
//! ```

use std::sync::Arc;

use showfinder_core::{ClientConfig, MarkupView, ShowCatalog, ShowController};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use tracing::info;

mod commands;

/// Shared controller for all plugin commands
///
/// The controller serializes view updates internally and drops responses
/// superseded by a newer command, so commands may run concurrently.
pub struct ShowfinderState {
    pub(crate) controller: Arc<ShowController<MarkupView>>,
}

impl ShowfinderState {
    /// Create a new ShowfinderState against the public TVMaze API
    ///
    /// # Errors
    /// Returns error string if HTTP client initialization fails
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new ShowfinderState with custom client configuration
    ///
    /// # Errors
    /// Returns error string if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let catalog = ShowCatalog::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            controller: Arc::new(ShowController::new(catalog, MarkupView::new())),
        })
    }
}

/// Initialize the showfinder plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(showfinder_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("showfinder")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::get_episodes,
            commands::view_state
        ])
        .setup(|app, _api| {
            let state = ShowfinderState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            info!("showfinder plugin ready");
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showfinder_core::{Episode, Show, ViewSnapshot};
