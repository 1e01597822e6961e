use crate::app::App;
use crate::ui::layout::{card_grid, ScreenLayout};
use crate::ui::{location_span, render_footer};
use portfolio_core::Project;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

const GALLERY_HINTS: &[(&str, &str)] = &[
    ("←/→", "Move"),
    ("Enter", "Open"),
    ("/", "Search"),
    ("s", "Skills"),
    ("?", "Help"),
    ("q", "Quit"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[("Enter", "Apply"), ("Esc", "Cancel")];

/// Search bar (shown while a query exists) and the card grid area.
pub fn gallery_areas(app: &App, body: Rect) -> (Option<Rect>, Rect) {
    if !app.search.active && app.search.query.is_empty() {
        return (None, body);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(body);
    (Some(chunks[0]), chunks[1])
}

pub fn render_gallery(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Projects",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        location_span(app),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, layout.header);

    let (search_area, cards_area) = gallery_areas(app, layout.body);
    if let Some(area) = search_area {
        render_search_bar(app, f, area);
    }

    let projects = app.visible_projects();
    if projects.is_empty() {
        let message = if app.catalog.is_empty() {
            "No projects stored. Run with --seed-sample or --import PATH to load a portfolio."
        } else {
            "No projects match the search."
        };
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            cards_area,
        );
    } else {
        let highlighted = app.highlighted_project().map(|project| &project.id);
        for (index, area) in card_grid(cards_area, projects.len(), app.focused_card) {
            let project = projects[index];
            let focused = index == app.focused_card;
            let is_highlighted = highlighted == Some(&project.id);
            render_card(f, area, project, focused, is_highlighted);
        }
    }

    let hints = if app.search.active {
        SEARCH_HINTS
    } else {
        GALLERY_HINTS
    };
    render_footer(app, f, layout.footer, hints);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cursor = if app.search.active { "█" } else { "" };
    let border = if app.search.active {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let bar = Paragraph::new(format!("{}{cursor}", app.search.query)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(bar, area);
}

fn render_card(f: &mut Frame<'_>, area: Rect, project: &Project, focused: bool, highlighted: bool) {
    let border = if focused {
        Color::Yellow
    } else if highlighted {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(project.description.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    if let Some(metric) = project.impact_metric() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("▲ {metric}"),
                Style::default().fg(Color::Green),
            )),
            chunks[1],
        );
    }

    f.render_widget(Paragraph::new(tool_badges(&project.tools)), chunks[2]);

    let mut links = Vec::new();
    if project.demo_link.is_some() {
        links.push(Span::styled("↗ demo  ", Style::default().fg(Color::Cyan)));
    }
    if project.github_link.is_some() {
        links.push(Span::styled("⌂ code", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(links)), chunks[3]);
}

pub fn tool_badges(tools: &[String]) -> Line<'static> {
    let badge = Style::default().fg(Color::Black).bg(Color::Cyan);
    let spans = tools.iter().flat_map(|tool| {
        [
            Span::styled(format!(" {tool} "), badge),
            Span::raw(" "),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}
