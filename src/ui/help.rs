use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::UiTheme;

pub fn build_help_text(theme: &UiTheme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(theme, "Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Artwork"));
    lines.extend(section_lines(&[
        "Tab: Switch strategy (shuffle / noise)",
        "/: Edit title (enter to apply, esc to cancel)",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Theme"));
    lines.extend(section_lines(&[
        "t: Toggle light/dark (saved as your preference)",
        "pixelhead theme clear: Follow the system again",
    ]));

    Text::from(lines)
}

fn section_title(theme: &UiTheme, title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&'static str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| Line::from(format!("  {item}")))
        .collect()
}
