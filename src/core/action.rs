//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User types in the search box? That's `Action::SetSearchTerm`.
//! A fetch task finishes? That's `Action::TrendingLoaded`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the shell what I/O to run.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Fetch triggering
//!
//! The two lanes re-fetch exactly when their inputs change:
//! trending depends on {current_page, sort_order}; search depends on
//! {search_term, current_page, sort_order} and only runs while a search
//! term is set. There is no debounce and in-flight requests are not
//! cancelled. Instead every issued fetch carries the lane's sequence
//! number; a completion is applied only if it is still the most recently
//! issued for its lane, so a slow stale response can never overwrite a
//! newer one.

use log::{debug, warn};

use crate::core::pagination::clamp_page;
use crate::core::state::{App, PAGE_SIZE, SortOrder};
use crate::tmdb::{Movie, TmdbError};

#[derive(Debug)]
pub enum Action {
    /// The search input changed. Resets the page to 1.
    SetSearchTerm(String),
    /// A page button (or Previous/Next) was activated.
    SetPage(u32),
    /// The sort selector changed.
    SetSortOrder(SortOrder),
    /// Re-issues fetches for whatever is currently on display. Sent once
    /// at startup to populate the initial trending page.
    Refresh,
    /// A trending fetch finished.
    TrendingLoaded {
        seq: u64,
        result: Result<Vec<Movie>, TmdbError>,
    },
    /// A search fetch finished.
    SearchLoaded {
        seq: u64,
        result: Result<Vec<Movie>, TmdbError>,
    },
    Quit,
}

/// What the shell should do after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn fetches for the flagged lanes, using the sequence numbers
    /// now recorded in the state.
    Fetch { trending: bool, search: bool },
    Quit,
}

/// Applies `action` to `app` and returns the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetSearchTerm(term) => {
            if term == app.search_term {
                return Effect::None;
            }
            let page_changed = app.current_page != 1;
            app.search_term = term;
            app.current_page = 1;
            let search = app.is_searching();
            plan_fetch(app, page_changed, search)
        }
        Action::SetPage(page) => {
            let page = clamp_page(page);
            if page == app.current_page {
                return Effect::None;
            }
            app.current_page = page;
            let search = app.is_searching();
            plan_fetch(app, true, search)
        }
        Action::SetSortOrder(order) => {
            if order == app.sort_order {
                return Effect::None;
            }
            app.sort_order = order;
            app.status_message = format!("Sort: {}", order.label());
            let search = app.is_searching();
            plan_fetch(app, true, search)
        }
        Action::Refresh => {
            let search = app.is_searching();
            plan_fetch(app, true, search)
        }
        Action::TrendingLoaded { seq, result } => {
            if seq != app.trending_seq {
                debug!(
                    "Discarding stale trending response (seq {} != latest {})",
                    seq, app.trending_seq
                );
                return Effect::None;
            }
            app.loading_trending = false;
            match result {
                Ok(mut movies) => {
                    apply_sort(&mut movies, app.sort_order);
                    app.trending = movies;
                }
                Err(e) => {
                    // Stale-but-available: the previous list stays up.
                    warn!("Trending fetch failed, keeping previous results: {}", e);
                }
            }
            Effect::None
        }
        Action::SearchLoaded { seq, result } => {
            if seq != app.search_seq {
                debug!(
                    "Discarding stale search response (seq {} != latest {})",
                    seq, app.search_seq
                );
                return Effect::None;
            }
            app.loading_search = false;
            match result {
                Ok(mut movies) => {
                    movies.truncate(PAGE_SIZE);
                    apply_sort(&mut movies, app.sort_order);
                    app.search_results = movies;
                }
                Err(e) => {
                    warn!("Search fetch failed, keeping previous results: {}", e);
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Records the lanes about to fetch: bumps their sequence numbers, flips
/// their loading flags, and folds the pair into an `Effect`.
fn plan_fetch(app: &mut App, trending: bool, search: bool) -> Effect {
    if !trending && !search {
        return Effect::None;
    }
    if trending {
        app.trending_seq += 1;
        app.loading_trending = true;
    }
    if search {
        app.search_seq += 1;
        app.loading_search = true;
    }
    Effect::Fetch { trending, search }
}

/// Sorts a result set by effective rating. `Unsorted` keeps server order;
/// the sort is stable, so equal ratings also keep it.
pub fn apply_sort(movies: &mut [Movie], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => {
            movies.sort_by(|a, b| a.sort_rating().total_cmp(&b.sort_rating()));
        }
        SortOrder::Descending => {
            movies.sort_by(|a, b| b.sort_rating().total_cmp(&a.sort_rating()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_set_search_term_resets_page_to_one() {
        let mut app = test_app();
        app.current_page = 7;

        let effect = update(&mut app, Action::SetSearchTerm("batman".to_string()));

        assert_eq!(app.current_page, 1);
        assert_eq!(
            effect,
            Effect::Fetch {
                trending: true,
                search: true
            }
        );
    }

    #[test]
    fn test_search_from_page_one_fetches_search_only() {
        let mut app = test_app();

        let effect = update(&mut app, Action::SetSearchTerm("batman".to_string()));

        assert_eq!(
            effect,
            Effect::Fetch {
                trending: false,
                search: true
            }
        );
        assert_eq!(app.search_seq, 1);
        assert!(app.loading_search);
        assert!(!app.loading_trending);
    }

    #[test]
    fn test_clearing_term_on_page_one_is_a_noop_fetch() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchTerm("x".to_string()));

        let effect = update(&mut app, Action::SetSearchTerm(String::new()));

        assert_eq!(effect, Effect::None);
        assert!(!app.is_searching());
    }

    #[test]
    fn test_page_change_without_search_fetches_only_trending() {
        let mut app = test_app();

        let effect = update(&mut app, Action::SetPage(5));

        assert_eq!(
            effect,
            Effect::Fetch {
                trending: true,
                search: false
            }
        );
        assert_eq!(app.current_page, 5);
        assert_eq!(app.trending_seq, 1);
        assert!(app.loading_trending);
    }

    #[test]
    fn test_sort_change_refetches_both_lanes_while_searching() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchTerm("dune".to_string()));

        let effect = update(&mut app, Action::SetSortOrder(SortOrder::Descending));

        assert_eq!(
            effect,
            Effect::Fetch {
                trending: true,
                search: true
            }
        );
        assert_eq!(app.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_unchanged_inputs_produce_no_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SetPage(1)), Effect::None);
        assert_eq!(
            update(&mut app, Action::SetSortOrder(SortOrder::Unsorted)),
            Effect::None
        );
        assert_eq!(
            update(&mut app, Action::SetSearchTerm(String::new())),
            Effect::None
        );
        assert_eq!(app.trending_seq, 0);
        assert_eq!(app.search_seq, 0);
    }

    #[test]
    fn test_page_is_clamped_to_bounds() {
        let mut app = test_app();
        update(&mut app, Action::SetPage(500));
        assert_eq!(app.current_page, 100);
    }

    #[test]
    fn test_trending_loaded_applies_ascending_sort() {
        let mut app = test_app();
        update(&mut app, Action::SetSortOrder(SortOrder::Ascending));

        let seq = app.trending_seq;
        let effect = update(
            &mut app,
            Action::TrendingLoaded {
                seq,
                result: Ok(vec![
                    movie(1, "High", Some(8.2)),
                    movie(2, "Low", Some(3.1)),
                    movie(3, "Mid", Some(5.5)),
                    movie(4, "Unrated", None),
                ]),
            },
        );

        assert_eq!(effect, Effect::None);
        assert!(!app.loading_trending);
        assert_eq!(titles(&app.trending), vec!["Unrated", "Low", "Mid", "High"]);
        for pair in app.trending.windows(2) {
            assert!(pair[0].sort_rating() <= pair[1].sort_rating());
        }
    }

    #[test]
    fn test_search_loaded_caps_then_sorts() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchTerm("war".to_string()));
        update(&mut app, Action::SetSortOrder(SortOrder::Descending));

        // A full remote page: 20 results, ratings 1.0, 2.0, ... 20.0.
        let page: Vec<Movie> = (1..=20)
            .map(|i| movie(i, &format!("M{i}"), Some(i as f32)))
            .collect();
        let seq = app.search_seq;
        update(
            &mut app,
            Action::SearchLoaded {
                seq,
                result: Ok(page),
            },
        );

        // The first PAGE_SIZE entries are windowed out, then sorted.
        assert_eq!(app.search_results.len(), PAGE_SIZE);
        assert_eq!(
            titles(&app.search_results),
            vec!["M6", "M5", "M4", "M3", "M2", "M1"]
        );
        for pair in app.search_results.windows(2) {
            assert!(pair[0].sort_rating() >= pair[1].sort_rating());
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::SetPage(2)); // seq 1
        update(&mut app, Action::SetPage(3)); // seq 2

        update(
            &mut app,
            Action::TrendingLoaded {
                seq: 1,
                result: Ok(vec![movie(1, "Stale", Some(1.0))]),
            },
        );
        assert!(app.trending.is_empty());
        assert!(app.loading_trending);

        update(
            &mut app,
            Action::TrendingLoaded {
                seq: 2,
                result: Ok(vec![movie(2, "Fresh", Some(2.0))]),
            },
        );
        assert_eq!(titles(&app.trending), vec!["Fresh"]);
        assert!(!app.loading_trending);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_results() {
        let mut app = test_app();
        app.trending = vec![movie(1, "Kept", Some(7.0))];
        update(&mut app, Action::SetPage(2));

        let seq = app.trending_seq;
        let effect = update(
            &mut app,
            Action::TrendingLoaded {
                seq,
                result: Err(TmdbError::Network("connection refused".to_string())),
            },
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(titles(&app.trending), vec!["Kept"]);
        assert!(!app.loading_trending);
    }

    #[test]
    fn test_refresh_fetches_displayed_lanes() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::Refresh),
            Effect::Fetch {
                trending: true,
                search: false
            }
        );
        assert_eq!(app.trending_seq, 1);
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
