use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tmdb::poster_url;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MovieList, PaginationBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, search_area, main_area, strip_area] = layout.areas(frame.area());

    draw_title_bar(frame, title_area, app);
    tui.search_bar.render(frame, search_area);

    let [list_area, detail_area] =
        Layout::horizontal([Percentage(60), Percentage(40)]).areas(main_area);
    draw_movie_pane(frame, list_area, app, tui);
    draw_detail_pane(frame, detail_area, app, tui);

    PaginationBar {
        current_page: app.current_page,
    }
    .render(frame, strip_area);
}

fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title_text = if app.is_loading() {
        format!(
            "Marquee ({}) | {} | {} | Loading...",
            app.source.name(),
            app.status_message,
            app.sort_order.label()
        )
    } else {
        format!(
            "Marquee ({}) | {} | {}",
            app.source.name(),
            app.status_message,
            app.sort_order.label()
        )
    };
    frame.render_widget(Span::raw(title_text), area);
}

/// Exactly one result set is on display: the heading and the movie list
/// both follow `App::is_searching()`.
fn draw_movie_pane(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let heading = if app.is_searching() {
        "Search Results"
    } else {
        "Trending Movies"
    };
    let block = Block::bordered().title(format!(" {heading} (page {}) ", app.current_page));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    MovieList {
        movies: app.displayed(),
        loading: app.is_loading(),
        state: &mut tui.movie_list,
    }
    .render(frame, inner);
}

fn draw_detail_pane(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let block = Block::bordered().title(" Details ");

    let Some(movie) = app.displayed().get(tui.movie_list.selected) else {
        frame.render_widget(block, area);
        return;
    };

    let rating_text = match movie.rating() {
        Some(r) => format!("{r:.1}"),
        None => "N/A".to_string(),
    };
    let poster_line = match &movie.poster_path {
        Some(path) => Line::styled(
            poster_url(&app.image_base_url, path),
            Style::default().fg(Color::DarkGray),
        ),
        None => Line::styled(
            "(no poster)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let lines = vec![
        Line::styled(
            movie.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(rating_text, Style::default().fg(Color::Yellow)),
        ]),
        poster_line,
        Line::raw(""),
        Line::raw(movie.overview.clone()),
    ];

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_ui_smoke() {
        let app = test_app();
        let text = rendered_text(&app);
        assert!(text.contains("Marquee (static)"));
        assert!(text.contains("Trending Movies"));
    }

    #[test]
    fn test_trending_view_hides_search_results() {
        let mut app = test_app();
        app.trending = vec![movie(1, "TrendingHit", Some(7.0))];
        app.search_results = vec![movie(2, "SearchHit", Some(8.0))];

        let text = rendered_text(&app);
        assert!(text.contains("Trending Movies"));
        assert!(text.contains("TrendingHit"));
        assert!(!text.contains("Search Results"));
        assert!(!text.contains("SearchHit"));
    }

    #[test]
    fn test_search_view_switches_heading_and_list() {
        let mut app = test_app();
        app.search_term = "hit".to_string();
        app.trending = vec![movie(1, "TrendingHit", Some(7.0))];
        app.search_results = vec![movie(2, "SearchHit", Some(8.0))];

        let text = rendered_text(&app);
        assert!(text.contains("Search Results"));
        assert!(text.contains("SearchHit"));
        assert!(!text.contains("Trending Movies"));
    }

    #[test]
    fn test_detail_pane_shows_poster_url() {
        let mut app = test_app();
        app.trending = vec![movie(42, "Detailed", Some(6.5))];

        let text = rendered_text(&app);
        assert!(text.contains("image.tmdb.org"));
        assert!(text.contains("poster-42.jpg"));
    }

    #[test]
    fn test_pagination_strip_is_rendered() {
        let mut app = test_app();
        app.current_page = 5;
        let text = rendered_text(&app);
        assert!(text.contains("[5]"));
        assert!(text.contains("Previous"));
        assert!(text.contains("Next"));
    }
}
