//! Tauri commands for showfinder
//!
//! Each command runs one pipeline through the shared controller and hands
//! the resulting view state back to the webview.

use showfinder_core::ViewSnapshot;
use tauri::State;

use crate::ShowfinderState;

/// Snapshot of the current view
pub(crate) async fn current_view(state: &ShowfinderState) -> ViewSnapshot {
    state.controller.with_view(|view| view.snapshot()).await
}

pub(crate) async fn run_search(
    state: &ShowfinderState,
    term: &str,
) -> Result<ViewSnapshot, String> {
    state
        .controller
        .search_and_display(term)
        .await
        .map_err(|e| e.to_string())?;
    Ok(current_view(state).await)
}

pub(crate) async fn run_get_episodes(
    state: &ShowfinderState,
    show_id: &str,
) -> Result<ViewSnapshot, String> {
    state
        .controller
        .expand_episodes_for(show_id)
        .await
        .map_err(|e| e.to_string())?;
    Ok(current_view(state).await)
}

/// Search for shows and render them
///
/// Bound to the `#searchForm` submit event.
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `term` - Contents of `#searchForm-term`, sent as-is
///
/// # Returns
/// View state after the search. If a newer search finished first, this is
/// the newer search's state.
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, ShowfinderState>,
    term: String,
) -> Result<ViewSnapshot, String> {
    run_search(&state, &term).await
}

/// Load and render the episodes of one show
///
/// Bound to clicks on `.Show-getEpisodes` inside `#showsList`.
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `show_id` - `data-show-id` of the enclosing `.Show` block
///
/// # Errors
/// Returns error message as String if the ID is invalid or the lookup fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, ShowfinderState>,
    show_id: String,
) -> Result<ViewSnapshot, String> {
    run_get_episodes(&state, &show_id).await
}

/// Current view state, e.g. after a page reload
#[tauri::command]
pub async fn view_state(state: State<'_, ShowfinderState>) -> Result<ViewSnapshot, String> {
    Ok(current_view(&state).await)
}
