//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core could be driven by a different adapter without changes.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//! the frame is redrawn only after an input event or a background fetch
//! completion. The poll timeout shortens while a fetch is in flight so
//! the loading indicator stays current.
//!
//! ## Fetch tasks
//!
//! Fetches run as tokio tasks and report back over an mpsc channel as
//! `Action::TrendingLoaded` / `Action::SearchLoaded`, tagged with the
//! sequence number recorded when they were spawned. The reducer discards
//! completions whose sequence is no longer the lane's latest, so
//! overlapping in-flight requests resolve last-issued-wins.

mod component;
mod components;
mod event;
mod ui;

use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::pagination::page_window;
use crate::core::state::App;
use crate::tmdb::{MovieSource, TmdbClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{MovieListState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub movie_list: MovieListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            movie_list: MovieListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the metadata source from a resolved config and a concrete key.
pub fn build_source(config: &ResolvedConfig, api_key: String) -> Arc<dyn MovieSource> {
    Arc::new(TmdbClient::new(
        api_key,
        Some(config.base_url.clone()),
        config.language.clone(),
    ))
}

pub fn run(config: ResolvedConfig, api_key: String) -> io::Result<()> {
    let source = build_source(&config, api_key);
    let mut app = App::new(source, config.image_base_url.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Populate the initial trending page (the mount effect)
    if let Effect::Fetch { trending, search } = update(&mut app, Action::Refresh) {
        spawn_fetch(&app, &tx, trending, search);
    }

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Shorter poll while a fetch is in flight so the loading
        // indicator and its completion show up promptly.
        let timeout = if app.loading_trending || app.loading_search {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let action = match tui_event {
                TuiEvent::ForceQuit => Some(Action::Quit),
                // Esc clears an active search; quits otherwise
                TuiEvent::Escape => {
                    if app.search_term.is_empty() {
                        Some(Action::Quit)
                    } else {
                        let SearchEvent::Changed(term) = tui.search_bar.clear();
                        Some(Action::SetSearchTerm(term))
                    }
                }
                TuiEvent::CycleSort => Some(Action::SetSortOrder(app.sort_order.next())),
                TuiEvent::PageBack => {
                    Some(Action::SetPage(app.current_page.saturating_sub(1).max(1)))
                }
                TuiEvent::PageForward => Some(Action::SetPage(app.current_page + 1)),
                // Previous/Next window buttons: no-ops while hidden
                TuiEvent::WindowPrev => page_window(app.current_page).prev.map(Action::SetPage),
                TuiEvent::WindowNext => page_window(app.current_page).next.map(Action::SetPage),
                TuiEvent::CursorUp => {
                    tui.movie_list.select_prev(app.displayed().len());
                    None
                }
                TuiEvent::CursorDown => {
                    tui.movie_list.select_next(app.displayed().len());
                    None
                }
                TuiEvent::InputChar(_) | TuiEvent::Backspace => tui
                    .search_bar
                    .handle_event(&tui_event)
                    .map(|SearchEvent::Changed(term)| Action::SetSearchTerm(term)),
                TuiEvent::Resize => None,
            };

            if let Some(action) = action {
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::Fetch { trending, search } => {
                        spawn_fetch(&app, &tx, trending, search);
                    }
                    Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::Fetch { trending, search } => {
                    spawn_fetch(&app, &tx, trending, search);
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawns fetch tasks for the flagged lanes. Each task carries the
/// sequence number its lane recorded in `update()`; the completion action
/// hands it back so stale responses can be told apart from current ones.
fn spawn_fetch(app: &App, tx: &mpsc::Sender<Action>, trending: bool, search: bool) {
    if trending {
        let source = app.source.clone();
        let page = app.current_page;
        let seq = app.trending_seq;
        let tx = tx.clone();
        info!("Spawning trending fetch: page={} seq={}", page, seq);
        tokio::spawn(async move {
            let result = source.trending(page).await;
            if tx.send(Action::TrendingLoaded { seq, result }).is_err() {
                warn!("Failed to send trending result: receiver dropped");
            }
        });
    }

    if search {
        let source = app.source.clone();
        let term = app.search_term.clone();
        let page = app.current_page;
        let seq = app.search_seq;
        let tx = tx.clone();
        info!("Spawning search fetch: page={} seq={}", page, seq);
        tokio::spawn(async move {
            let result = source.search(&term, page).await;
            if tx.send(Action::SearchLoaded { seq, result }).is_err() {
                warn!("Failed to send search result: receiver dropped");
            }
        });
    }
}
