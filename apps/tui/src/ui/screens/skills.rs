use crate::app::App;
use crate::ui::layout::{skills_layout, ScreenLayout};
use crate::ui::widgets::radar::render_skill_radar;
use crate::ui::widgets::tables::scroll_offset;
use crate::ui::{location_span, render_footer};
use portfolio_core::{projects_for_skill, RadarChart};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

const SKILL_HINTS: &[(&str, &str)] = &[
    ("←/→", "Focus skill"),
    ("Enter", "Related projects"),
    ("Tab", "Next chart"),
    ("g", "Gallery"),
    ("?", "Help"),
    ("q", "Quit"),
];

pub fn render_skills(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout) {
    render_chart_tabs(app, f, layout.header);

    match app.active_chart() {
        Some(chart) => {
            let areas = skills_layout(layout.body);
            render_skill_radar(f, areas.radar, chart);
            render_skill_list(app, chart, f, areas.list);
        }
        None => {
            let paragraph = Paragraph::new(
                "No skills stored. Run with --seed-sample or --import PATH to load a portfolio.",
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Skills "));
            f.render_widget(paragraph, layout.body);
        }
    }

    render_footer(app, f, layout.footer, SKILL_HINTS);
}

fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles: Vec<String> = app
        .charts
        .iter()
        .map(|chart| chart.title().to_string())
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_chart)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(vec![
                    Span::styled(
                        " Portfolio ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    location_span(app),
                    Span::raw(" "),
                ])),
        );
    f.render_widget(tabs, area);
}

/// Table area and tooltip area of the skill list panel.
pub fn skill_list_areas(list: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(list);
    (chunks[0], chunks[1])
}

/// First skill drawn in the table so the focused row stays visible.
pub fn skill_scroll(list: Rect, count: usize, focused: usize) -> usize {
    let (table, _) = skill_list_areas(list);
    // Borders and header take three rows.
    let visible = usize::from(table.height.saturating_sub(3));
    scroll_offset(count, visible, focused)
}

/// Skill row under terminal row `row`; rows start below the border and header.
pub fn skill_row_at(
    list: Rect,
    row: u16,
    column: u16,
    count: usize,
    focused: usize,
) -> Option<usize> {
    let (table, _) = skill_list_areas(list);
    let first_row = table.y + 2;
    let inside = column > table.x && column + 1 < table.x + table.width;
    if !inside || row < first_row || row + 1 >= table.y + table.height {
        return None;
    }
    let index = usize::from(row - first_row) + skill_scroll(list, count, focused);
    (index < count).then_some(index)
}

fn render_skill_list(app: &App, chart: &RadarChart, f: &mut Frame<'_>, area: Rect) {
    let (table_area, tooltip_area) = skill_list_areas(area);

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Skill"),
        Cell::from("Level"),
        Cell::from("Tier"),
        Cell::from("Used in"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let offset = skill_scroll(area, chart.len(), app.focused_axis);
    let rows = chart.skills().iter().enumerate().skip(offset).map(|(index, skill)| {
        let style = if index == app.focused_axis {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if skill.has_projects() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let usage = match skill.project_ids().len() {
            0 => "-".to_string(),
            1 => "1 project".to_string(),
            n => format!("{n} projects"),
        };

        Row::new(vec![
            Cell::from(skill.icon().glyph()),
            Cell::from(skill.name().to_string()),
            Cell::from(format!("{:>3}%", skill.value())),
            Cell::from(skill.tier().label()),
            Cell::from(usage),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Skills ({}) ", chart.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .column_spacing(1);
    f.render_widget(table, table_area);

    render_tooltip(app, chart, f, tooltip_area);
}

fn render_tooltip(app: &App, chart: &RadarChart, f: &mut Frame<'_>, area: Rect) {
    let Some(skill) = chart.skill(app.focused_axis) else {
        return;
    };

    let mut lines: Vec<Line<'_>> = chart
        .tooltip(app.focused_axis)
        .into_iter()
        .map(Line::from)
        .collect();

    for project in projects_for_skill(skill.name(), &app.catalog) {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Cyan)),
            Span::raw(project.title.clone()),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} {} ", skill.icon().glyph(), skill.name()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}
