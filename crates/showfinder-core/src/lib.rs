//! Showfinder Core Library
//!
//! Searches the TVMaze catalog and lazily loads episode lists for the shows
//! a user picks.
//!
//! # Overview
//!
//! The crate is split into two layers:
//! - [`ShowCatalog`] runs the two request → data pipelines (show search,
//!   episode listing) against the TVMaze API
//! - [`ShowController`] feeds their results into a [`ShowsView`], guarding
//!   against out-of-order responses and surfacing failures in the view
//!
//! # Example
//!
//! ```no_run
//! use showfinder_core::{MarkupView, Result, ShowCatalog, ShowController};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let controller = ShowController::new(ShowCatalog::new()?, MarkupView::new());
//!
//!     // Form submission
//!     controller.search_and_display("batman").await?;
//!
//!     // Click on the first show's "Episodes" button
//!     if let Some(show) = controller.shows().await.first() {
//!         controller.expand_episodes(show.id).await?;
//!     }
//!
//!     let snapshot = controller.with_view(|view| view.snapshot()).await;
//!     println!("{}", snapshot.episodes_html);
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod controller;
mod error;
pub mod parser;
pub mod render;
mod types;
pub mod url;
mod view;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{Result, ShowfinderError};

// Re-export parser functions
pub use parser::{parse_episodes, parse_search_results};

// Re-export pipeline and controller API
pub use catalog::ShowCatalog;
pub use controller::{RenderOutcome, ShowController};

// Re-export data types
pub use types::{Episode, Show, ShowId};

// Re-export view types
pub use view::{MarkupView, ShowsView, ViewSnapshot};

// Re-export URL helpers for convenience
pub use url::{PLACEHOLDER_IMAGE_URL, parse_show_id};
