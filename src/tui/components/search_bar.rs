//! # SearchBar Component
//!
//! Single-line search input. Always focused: printable keys edit the term
//! directly, and every edit is emitted immediately. There is no debounce;
//! the fetch triggering downstream is live.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search movies";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term changed (every keystroke).
    Changed(String),
}

/// Search input component.
///
/// # State
///
/// - `term`: the current search term; edits happen at the end of the line,
///   matching a plain text input driven by change events.
pub struct SearchBar {
    pub term: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            term: String::new(),
        }
    }

    /// Clears the term (Esc). Returns the resulting event for the shell.
    pub fn clear(&mut self) -> SearchEvent {
        self.term.clear();
        SearchEvent::Changed(String::new())
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.term.push(*c);
                Some(SearchEvent::Changed(self.term.clone()))
            }
            TuiEvent::Backspace => {
                self.term.pop()?;
                Some(SearchEvent::Changed(self.term.clone()))
            }
            _ => None,
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let (text, style) = if self.term.is_empty() {
            (
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                visible_tail(&self.term, inner_width),
                Style::default().fg(Color::Cyan),
            )
        };

        let input = Paragraph::new(text)
            .style(style)
            .block(Block::bordered().title("Search"));
        frame.render_widget(input, area);
    }
}

/// Returns the longest suffix of `term` that fits in `max_width` columns,
/// so the end of a long term stays visible while typing.
fn visible_tail(term: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = term.len();
    for (idx, ch) in term.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &term[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_char_emits_changed() {
        let mut bar = SearchBar::new();
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('b')),
            Some(SearchEvent::Changed("b".to_string()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("ba".to_string()))
        );
    }

    #[test]
    fn test_backspace_pops_last_char() {
        let mut bar = SearchBar::new();
        bar.term = "dune".to_string();
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("dun".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_term_emits_nothing() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_clear_resets_term() {
        let mut bar = SearchBar::new();
        bar.term = "batman".to_string();
        assert_eq!(bar.clear(), SearchEvent::Changed(String::new()));
        assert!(bar.term.is_empty());
    }

    #[test]
    fn test_visible_tail_keeps_suffix() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        // Wide chars count as two columns
        assert_eq!(visible_tail("a日本", 4), "日本");
    }
}
