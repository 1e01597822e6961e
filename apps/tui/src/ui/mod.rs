// UI module for portfolio_tui
// Handles all rendering; geometry lives in `layout` so mouse input can share it

pub mod layout;
pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = layout::screen_layout(f.area());

    match app.screen {
        AppScreen::Skills => screens::skills::render_skills(app, f, &layout),
        AppScreen::Gallery => {
            screens::gallery::render_gallery(app, f, &layout);
            if app.is_detail_open() {
                screens::detail::render_detail(app, f, layout::detail_popup(f.area()));
            }
        }
    }

    if app.show_help {
        screens::help::render_help(app, f, layout::help_popup(f.area()));
    }
}

/// Status message (if any) above a row of `key: action` hints.
pub fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect, hints: &[(&str, &str)]) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(": {action}   ")));
    }

    let mut lines = vec![Line::from(spans)];
    if !app.status_message.is_empty() {
        lines.insert(
            0,
            Line::from(Span::styled(
                app.status_message.clone(),
                Style::default().fg(Color::LightRed),
            )),
        );
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP).border_style(
            Style::default().fg(Color::DarkGray),
        ));
    f.render_widget(paragraph, area);
}

/// Location bar: the navigator's current path and query.
pub fn location_span(app: &App) -> Span<'static> {
    use portfolio_core::Navigator as _;
    Span::styled(
        app.navigator.current().to_string(),
        Style::default().fg(Color::DarkGray),
    )
}
