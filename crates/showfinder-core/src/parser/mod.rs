//! JSON parsers for TVMaze responses
//!
//! Contains the wire types and the normalizers turning them into
//! [`Show`](crate::Show) and [`Episode`](crate::Episode) records.

mod api;
pub mod episodes;
pub mod search;

pub use api::{ApiEpisode, ApiImage, ApiShow, SearchHit};
pub use episodes::parse_episodes;
pub use search::parse_search_results;
