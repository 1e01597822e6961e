use crate::app::{App, AppScreen};
use crate::cli::CliArgs;
use crate::ui::widgets::popup::render_popup_frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const SKILL_KEYS: &[(&str, &str)] = &[
    ("←/→ h/l", "Focus the previous or next skill"),
    ("Enter", "Show the projects that use the skill"),
    ("Tab", "Switch skill chart"),
    ("g", "Open the project gallery"),
    ("b", "Back to the previous location"),
    ("Mouse", "Hover a skill, click to open its project"),
];

const GALLERY_KEYS: &[(&str, &str)] = &[
    ("Arrows", "Move between cards"),
    ("Enter", "Open the focused project"),
    ("/", "Search titles and tools"),
    ("s", "Back to skills"),
    ("b", "Back to the previous location"),
    ("Esc", "Clear search, then back to skills"),
];

const DETAIL_KEYS: &[(&str, &str)] = &[
    ("←/→", "Previous or next image"),
    ("1-9", "Jump to an image"),
    ("Tab", "Next section"),
    ("n/p", "Next or previous project"),
    ("Esc", "Close the project"),
];

const GLOBAL_KEYS: &[(&str, &str)] = &[("? F1", "Toggle this help"), ("q", "Quit")];

pub fn render_help(app: &App, f: &mut Frame<'_>, area: Rect) {
    let inner = render_popup_frame(f, area, "Help", Color::Yellow);

    let screen_keys = match app.screen {
        AppScreen::Skills => ("Skills", SKILL_KEYS),
        AppScreen::Gallery if app.is_detail_open() => ("Project", DETAIL_KEYS),
        AppScreen::Gallery => ("Gallery", GALLERY_KEYS),
    };

    let mut lines = Vec::new();
    for (title, keys) in [screen_keys, ("General", GLOBAL_KEYS)] {
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<10}"),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Command line",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        CliArgs::help_text()
            .lines()
            .skip_while(|line| !line.starts_with("Options"))
            .skip(1)
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::sample::{sample_catalog, sample_skill_groups};
    use portfolio_core::{enrich_groups, Portfolio, SKILLS_PATH};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::error::Error;

    #[test]
    fn lists_keys_and_command_line_flags() -> Result<(), Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let skill_groups = enrich_groups(&sample_skill_groups()?, &catalog);
        let mut app = App::new(
            Portfolio {
                catalog,
                skill_groups,
            },
            SKILLS_PATH,
        );
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(160, 60))?;
        terminal.draw(|f| crate::ui::ui(&app, f))?;
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();

        assert!(screen.contains("Open the project gallery"));
        assert!(screen.contains("Command line"));
        assert!(screen.contains("--seed-sample"));
        assert!(screen.contains("--highlight"));
        Ok(())
    }
}
