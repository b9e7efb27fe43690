//! # PaginationBar Component
//!
//! Renders the sliding window of page buttons plus the conditional
//! Previous/Next buttons. All window math lives in `core::pagination`;
//! this component only turns a window into styled spans.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::pagination::page_window;
use crate::tui::component::Component;

pub struct PaginationBar {
    pub current_page: u32,
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let strip = Paragraph::new(strip_line(self.current_page)).alignment(Alignment::Center);
        frame.render_widget(strip, area);
    }
}

/// Builds the button strip for one value of `current_page`.
fn strip_line(current_page: u32) -> Line<'static> {
    let window = page_window(current_page);
    let mut spans: Vec<Span> = Vec::new();

    if window.prev.is_some() {
        spans.push(Span::styled(
            "◀ Previous",
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("  "));
    }

    for page in window.pages() {
        let label = format!("[{page}]");
        if page == current_page {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
        spans.push(Span::raw(" "));
    }

    if window.next.is_some() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("Next ▶", Style::default().fg(Color::Cyan)));
    }

    Line::from(spans)
}
