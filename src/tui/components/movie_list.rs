//! # MovieList Component
//!
//! Scrollable list of movie cards with a selection cursor. Each card shows
//! the title, the effective rating, and the overview. Card heights are
//! cached per render pass so selection can be kept in view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tmdb::Movie;
use crate::tui::component::Component;

/// Presentation state that survives across render passes.
pub struct MovieListState {
    pub scroll_state: ScrollViewState,
    pub selected: usize,
    heights: Vec<u16>,
}

impl MovieListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            heights: Vec::new(),
        }
    }

    /// Moves the cursor down, wrapping past the end.
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Moves the cursor up, wrapping past the start.
    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    fn clamp_selection(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Adjusts the scroll offset so the selected card is fully visible.
    fn scroll_to_selected(&mut self, viewport_height: u16) {
        let top: u16 = self.heights[..self.selected].iter().sum();
        let bottom = top + self.heights.get(self.selected).copied().unwrap_or(0);
        let offset = self.scroll_state.offset().y;

        if top < offset {
            self.scroll_state.set_offset(Position::new(0, top));
        } else if bottom > offset + viewport_height {
            self.scroll_state
                .set_offset(Position::new(0, bottom.saturating_sub(viewport_height)));
        }
    }
}

impl Default for MovieListState {
    fn default() -> Self {
        Self::new()
    }
}

struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedCard<'a> {
    fn new(movie: &'a Movie, content_width: u16, is_selected: bool) -> Self {
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let rating_text = match movie.rating() {
            Some(r) => format!("{r:.1}"),
            None => "N/A".to_string(),
        };
        let rating_line = Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(rating_text, Style::default().fg(Color::Yellow)),
        ]);

        let paragraph = Paragraph::new(vec![rating_line, Line::raw(movie.overview.as_str())])
            .block(
                Block::bordered()
                    .title(Span::styled(
                        movie.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true });

        let inner_width = content_width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        RenderedCard { paragraph, height }
    }
}

/// The card list. Movies and loading state are props; selection and scroll
/// offset live in [`MovieListState`].
pub struct MovieList<'a> {
    pub movies: &'a [Movie],
    pub loading: bool,
    pub state: &'a mut MovieListState,
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.movies.is_empty() {
            let text = if self.loading {
                "Loading movies..."
            } else {
                "No movies to show."
            };
            let empty = Paragraph::new(text).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp_selection(self.movies.len());

        let content_width = area.width.saturating_sub(1);
        let cards: Vec<RenderedCard> = self
            .movies
            .iter()
            .enumerate()
            .map(|(index, movie)| {
                RenderedCard::new(movie, content_width, index == self.state.selected)
            })
            .collect();

        self.state.heights = cards.iter().map(|c| c.height).collect();
        self.state.scroll_to_selected(area.height);

        let total_height: u16 = self.state.heights.iter().sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in &cards {
            let card_rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph.clone(), card_rect);
            y_offset += card.height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
