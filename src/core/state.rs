//! # Application State
//!
//! Core browser state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn MovieSource>   // remote metadata API
//! ├── search_term: String            // empty = no active search
//! ├── current_page: u32              // 1-based
//! ├── sort_order: SortOrder          // rating sort for both lanes
//! ├── trending: Vec<Movie>           // trending result set
//! ├── search_results: Vec<Movie>     // search result set (≤ PAGE_SIZE)
//! ├── trending_seq / search_seq      // per-lane fetch sequence numbers
//! ├── loading_trending / loading_search
//! ├── status_message: String         // status bar text
//! └── image_base_url: String         // poster CDN base
//! ```
//!
//! Exactly one of the two result sets is displayed at a time, selected by
//! whether `search_term` is empty. State changes only happen through
//! `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::tmdb::{Movie, MovieSource};

/// Display cap for the search result set.
pub const PAGE_SIZE: usize = 6;

/// Rating sort applied to the displayed result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the server-provided order.
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Cycles to the next order (for the Tab-driven selector).
    pub fn next(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }

    /// Human-readable label, mirroring the selector options.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Sort by Rating",
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

pub struct App {
    pub source: Arc<dyn MovieSource>,
    pub search_term: String,
    pub current_page: u32,
    pub sort_order: SortOrder,
    pub trending: Vec<Movie>,
    pub search_results: Vec<Movie>,
    /// Sequence number of the most recently issued trending fetch.
    pub trending_seq: u64,
    /// Sequence number of the most recently issued search fetch.
    pub search_seq: u64,
    pub loading_trending: bool,
    pub loading_search: bool,
    pub status_message: String,
    pub image_base_url: String,
}

impl App {
    pub fn new(source: Arc<dyn MovieSource>, image_base_url: String) -> Self {
        Self {
            source,
            search_term: String::new(),
            current_page: 1,
            sort_order: SortOrder::default(),
            trending: Vec::new(),
            search_results: Vec::new(),
            trending_seq: 0,
            search_seq: 0,
            loading_trending: false,
            loading_search: false,
            status_message: String::from("Welcome to Marquee!"),
            image_base_url,
        }
    }

    /// True when a search is active and the search result set is shown.
    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// The result set currently on display.
    pub fn displayed(&self) -> &[Movie] {
        if self.is_searching() {
            &self.search_results
        } else {
            &self.trending
        }
    }

    /// True while the displayed lane has a fetch in flight.
    pub fn is_loading(&self) -> bool {
        if self.is_searching() {
            self.loading_search
        } else {
            self.loading_trending
        }
    }
}
