use crate::app::{App, DetailTab};
use crate::ui::screens::gallery::tool_badges;
use crate::ui::widgets::popup::render_popup_frame;
use portfolio_core::{CarouselFrame, DetailCarousel, Project};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(project) = app.highlighted_project() else {
        return;
    };
    let inner = render_popup_frame(f, area, &project.title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Image carousel
            Constraint::Length(1), // Tabs
            Constraint::Min(3),    // Tab content
            Constraint::Length(1), // Tools
            Constraint::Length(2), // Links and keys
        ])
        .split(inner);

    let carousel = app
        .gallery
        .as_ref()
        .and_then(|gallery| gallery.carousel())
        .copied()
        .unwrap_or_else(|| DetailCarousel::new(0));
    render_carousel(f, chunks[0], &carousel, &project.images);

    let titles: Vec<&str> = DetailTab::ALL.iter().map(|tab| tab.label()).collect();
    let tabs = Tabs::new(titles)
        .select(app.detail_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[1]);

    f.render_widget(
        Paragraph::new(tab_lines(project, app.detail_tab)).wrap(Wrap { trim: true }),
        chunks[2],
    );

    f.render_widget(Paragraph::new(tool_badges(&project.tools)), chunks[3]);

    let mut links = Vec::new();
    if let Some(demo) = &project.demo_link {
        links.push(Span::styled("Live demo ", Style::default().fg(Color::Gray)));
        links.push(Span::styled(
            format!("{demo}  "),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(github) = &project.github_link {
        links.push(Span::styled("Source ", Style::default().fg(Color::Gray)));
        links.push(Span::styled(
            github.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }
    let keys = Line::from(Span::styled(
        "←/→ images  1-9 jump  Tab sections  n/p projects  Esc close",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(vec![Line::from(links), keys]), chunks[4]);
}

fn render_carousel(f: &mut Frame<'_>, area: Rect, carousel: &DetailCarousel, images: &[String]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = match carousel.frame(images) {
        CarouselFrame::Placeholder => vec![Line::from(Span::styled(
            "No images",
            Style::default().fg(Color::DarkGray),
        ))],
        CarouselFrame::Image { index, len, url } => {
            let (left, right) = if carousel.has_controls() {
                ("◀  ", "  ▶")
            } else {
                ("", "")
            };
            vec![
                Line::from(vec![
                    Span::styled(left, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("Image {}/{len}", index + 1),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(right, Style::default().fg(Color::Yellow)),
                ]),
                Line::from(Span::styled(url, Style::default().fg(Color::Gray))),
            ]
        }
    };

    if carousel.has_controls() {
        let dots: Vec<Span<'_>> = carousel
            .indicators()
            .map(|(_, current)| {
                if current {
                    Span::styled("● ", Style::default().fg(Color::Cyan))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        lines.push(Line::from(dots));
    }

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn tab_lines(project: &Project, tab: DetailTab) -> Vec<Line<'_>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    match tab {
        DetailTab::Overview => vec![
            Line::from(vec![
                Span::styled("Role: ", heading),
                Span::raw(project.role.as_str()),
            ]),
            Line::default(),
            Line::from(project.description.as_str()),
        ],
        DetailTab::Problem => vec![Line::from(project.problem.as_str())],
        DetailTab::Solution => vec![Line::from(project.solution.as_str())],
        DetailTab::Challenges => bullet_lines(&project.challenges),
        DetailTab::Results => bullet_lines(&project.results),
    }
}

fn bullet_lines(items: &[String]) -> Vec<Line<'_>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled(
            "Nothing recorded",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(item.as_str()),
            ])
        })
        .collect()
}
