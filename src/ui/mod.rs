mod canvas;
mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use crate::theme::SchemeSource;

pub use theme::UiTheme;

use canvas::ArtCanvas;
use helpers::{clamp_name, contrast_text, rgb_to_color};

/// Renders the entire UI for a single frame.
pub fn draw<Src: SchemeSource>(frame: &mut Frame, app: &App<Src>) {
    let theme = app.theme.presentation();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let title_width = usize::from(layout[0].width.saturating_sub(20));
    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Pixelhead  ",
            Style::default().fg(theme.background()).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            clamp_name(&app.title, title_width),
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(bordered(theme));
    frame.render_widget(header, layout[0]);

    let body = bordered(theme);
    let inner = body.inner(layout[1]);
    frame.render_widget(body, layout[1]);
    match (app.view, &app.artwork) {
        (AppView::Help, _) => {
            let help = Paragraph::new(help::build_help_text(theme))
                .style(Style::default().fg(theme.text()));
            frame.render_widget(help, inner);
        }
        (AppView::Preview, Some(artwork)) => {
            frame.render_widget(ArtCanvas { grid: &artwork.grid }, inner);
        }
        (AppView::Preview, None) => {
            let placeholder = Paragraph::new("No artwork")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.dim()));
            frame.render_widget(placeholder, inner);
        }
    }

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(bordered(theme));
    frame.render_widget(footer, layout[2]);
}

fn bordered(theme: &UiTheme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.secondary()).bg(theme.background()))
}

fn footer_line<Src: SchemeSource>(app: &App<Src>) -> Line<'static> {
    let theme = app.theme.presentation();
    if let Some(input) = &app.title_input {
        return Line::from(vec![
            Span::styled("Title: ", Style::default().fg(theme.accent())),
            Span::styled(format!("{input}_"), Style::default().fg(theme.text())),
        ]);
    }
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.warn()),
        ));
    }
    // The seed sits on a swatch of the artwork's top-left cell.
    let (seed, seed_style) = match &app.artwork {
        Some(artwork) => {
            let style = match artwork.grid.get(0, 0) {
                Some(corner) => Style::default()
                    .fg(contrast_text(corner))
                    .bg(rgb_to_color(corner)),
                None => Style::default().fg(theme.accent()),
            };
            (format!(" {:08x} ", artwork.seed), style)
        }
        None => (
            " -------- ".to_string(),
            Style::default().fg(theme.accent()),
        ),
    };
    Line::from(vec![
        Span::styled("seed", Style::default().fg(theme.dim())),
        Span::styled(seed, seed_style),
        Span::styled("  strategy ", Style::default().fg(theme.dim())),
        Span::styled(app.strategy.label(), Style::default().fg(theme.accent())),
        Span::styled("  theme ", Style::default().fg(theme.dim())),
        Span::styled(theme.mode().as_str(), Style::default().fg(theme.accent())),
        Span::styled("  ? help", Style::default().fg(theme.dim())),
    ])
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    use ratatui::style::Color;

    use super::*;
    use crate::app::AppEvent;
    use crate::db;
    use crate::types::ThemeMode;

    struct Light;

    impl SchemeSource for Light {
        fn current(&self) -> ThemeMode {
            ThemeMode::Light
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_preview_footer_and_help() {
        let conn = db::init(":memory:").unwrap();
        let mut app = App::with_scheme(conn, "Hello".to_string(), Light).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();

        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Pixelhead"));
        assert!(text.contains("strategy shuffle"));
        assert!(text.contains("theme light"));

        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Key bindings"));
    }

    #[test]
    fn footer_seed_sits_on_corner_swatch() {
        let conn = db::init(":memory:").unwrap();
        let app = App::with_scheme(conn, "Cyberpunk Gradient Post".to_string(), Light).unwrap();
        let line = footer_line(&app);
        let seed = &line.spans[1];
        assert_eq!(seed.content, " b35ac863 ");
        // Top-left cell of this title's grid is #ff00ff.
        assert_eq!(seed.style.bg, Some(Color::Rgb(0xff, 0x00, 0xff)));
        assert_eq!(seed.style.fg, Some(Color::White));
    }
}
