//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `catalog`: Static artist/album/song data
//! - `navigation`: Drill-down view state machine
//! - `ranking`: Dense album/song rankings and sort mode
//! - `ordering`: Catalog arranged for the active sort mode
//! - `store`: Local key-value persistence
//! - `types`: UI state (cursors, overlays, animations)
//! - `app_model`: Main application model tying it all together

mod app_model;
pub mod catalog;
pub mod navigation;
pub mod ordering;
pub mod ranking;
pub mod store;
mod types;

// Re-export all public types for convenient access
pub use catalog::{Album, Artist, Catalog, Song};
pub use navigation::{Discography, NavigationState, Transition, TransitionDirection, View};
pub use ordering::Shelf;
pub use ranking::{RankNamespace, RankingBook, RankingRecord, RankingTable, SortMode, RANKINGS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{ActiveTransition, UiState};

pub use app_model::AppModel;
