//! Core data types for showfinder
//!
//! Contains the normalized show and episode records handed to the view and
//! to Tauri front ends.

use serde::{Deserialize, Serialize};

/// TVMaze show identifier
pub type ShowId = u64;

/// A show from a catalog search
///
/// All fields implement Serialize and Deserialize for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show ID
    pub id: ShowId,

    /// Show title
    pub name: String,

    /// Summary as delivered by the API; may contain HTML markup
    pub summary: String,

    /// Medium-size artwork URL, or the placeholder image when none exists
    pub image: String,
}

/// A single episode of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode ID
    pub id: u64,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: u32,

    /// Episode number within the season (None for specials)
    pub number: Option<u32>,
}
