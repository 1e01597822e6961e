mod navigator;
mod view;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use portfolio_core::{CarouselFrame, PortfolioExport};
use ratzilla::event::KeyCode;
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use navigator::BrowserNavigator;
use view::WebApp;

enum LoadState {
    Loading,
    Ready(WebApp<BrowserNavigator>),
    Failed(String),
}

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(LoadState::Loading));

    spawn_local(fetch_portfolio(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            let LoadState::Ready(app) = &mut *state else {
                return;
            };
            match event.code {
                KeyCode::Up | KeyCode::Char('k') => app.focus_axis(false),
                KeyCode::Down | KeyCode::Char('j') => app.focus_axis(true),
                KeyCode::Enter => {
                    app.activate_focused();
                }
                KeyCode::Tab => app.next_chart(),
                KeyCode::Left | KeyCode::Char('h') => app.step_image(false),
                KeyCode::Right | KeyCode::Char('l') => app.step_image(true),
                KeyCode::Char('n') => {
                    app.step_project(true);
                }
                KeyCode::Char('p') => {
                    app.step_project(false);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    app.jump_image(c as usize - '1' as usize);
                }
                KeyCode::Esc => {
                    app.close();
                }
                _ => {}
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Portfolio")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        match &*state.borrow() {
            LoadState::Ready(app) => render_page(app, f, inner),
            LoadState::Loading => centered_message(f, inner, "Loading portfolio.json..."),
            LoadState::Failed(error) => centered_message(f, inner, error),
        }
    });

    Ok(())
}

fn centered_message(f: &mut Frame<'_>, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Text::from(Line::from(message.to_string())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_page(app: &WebApp<BrowserNavigator>, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(2),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.location(),
            Style::default().fg(Color::DarkGray),
        ))),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    render_skills(app, f, columns[0]);
    render_projects(app, f, columns[1]);

    let mut footer = vec![Line::from(Span::styled(
        "↑/↓ skill  Enter projects  Tab chart  ←/→ images  n/p project  Esc close",
        Style::default().fg(Color::Gray),
    ))];
    if !app.status.is_empty() {
        footer.insert(
            0,
            Line::from(Span::styled(
                app.status.clone(),
                Style::default().fg(Color::LightRed),
            )),
        );
    }
    f.render_widget(Paragraph::new(footer), rows[2]);
}

fn render_skills(app: &WebApp<BrowserNavigator>, f: &mut Frame<'_>, area: Rect) {
    let Some(chart) = app.chart() else {
        centered_message(f, area, "No skills in portfolio.json");
        return;
    };

    let lines: Vec<Line<'_>> = chart
        .skills()
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let filled = usize::from(skill.value() / 10);
            let style = if index == app.focused_axis() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if skill.has_projects() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(
                    format!("{} {:<14}", skill.icon().glyph(), skill.name()),
                    style,
                ),
                Span::styled(
                    format!(" {}{}", "█".repeat(filled), "░".repeat(10 - filled)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {:>3}%", skill.value())),
            ])
        })
        .collect();

    let mut text = lines;
    text.push(Line::default());
    text.extend(
        chart
            .tooltip(app.focused_axis())
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
    );

    let block = Block::default()
        .title(format!(" {} ", chart.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_projects(app: &WebApp<BrowserNavigator>, f: &mut Frame<'_>, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    let highlighted = app.highlighted_project().map(|project| &project.id);
    let cards: Vec<Line<'_>> = app
        .gallery()
        .catalog()
        .iter()
        .map(|project| {
            let marker = if highlighted == Some(&project.id) {
                Span::styled("▶ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            Line::from(vec![
                marker,
                Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    project
                        .impact_metric()
                        .map(|metric| format!("  {metric}"))
                        .unwrap_or_default(),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(cards).block(
            Block::default()
                .title(" Projects ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        ),
        sections[0],
    );

    let Some(project) = app.highlighted_project() else {
        centered_message(f, sections[1], "Select a skill to open a project");
        return;
    };

    let image = app
        .gallery()
        .carousel()
        .map_or(CarouselFrame::Placeholder, |carousel| carousel.frame(&project.images));
    let image_line = match image {
        CarouselFrame::Placeholder => "No images".to_string(),
        CarouselFrame::Image { index, len, url } => format!("Image {}/{len}  {url}", index + 1),
    };

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(image_line, Style::default().fg(Color::Gray))),
        Line::default(),
        Line::from(vec![Span::styled("Role: ", heading), Span::raw(project.role.as_str())]),
        Line::from(Span::styled("Problem", heading)),
        Line::from(project.problem.as_str()),
        Line::from(Span::styled("Solution", heading)),
        Line::from(project.solution.as_str()),
        Line::from(Span::styled("Results", heading)),
    ];
    lines.extend(
        project
            .results
            .iter()
            .map(|result| Line::from(format!("• {result}"))),
    );
    lines.push(Line::from(Span::styled(
        project.tools.join(" · "),
        Style::default().fg(Color::Cyan),
    )));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(format!(" {} ", project.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        sections[1],
    );
}

async fn fetch_portfolio(store: Rc<RefCell<LoadState>>) {
    let fail = |message: String| {
        web_sys::console::error_1(&message.clone().into());
        *store.borrow_mut() = LoadState::Failed(message);
    };

    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init("portfolio.json", &opts) else {
        return fail("Failed to build request for portfolio.json".to_string());
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        return fail("Failed to fetch portfolio.json".to_string());
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        return fail("Failed to read response".to_string());
    };

    let Ok(body) = response.json() else {
        return fail("portfolio.json is not JSON".to_string());
    };
    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body).await else {
        return fail("Failed to read portfolio.json body".to_string());
    };

    let portfolio = match serde_wasm_bindgen::from_value::<PortfolioExport>(json) {
        Ok(export) => export.into_portfolio(),
        Err(error) => return fail(format!("Failed to parse portfolio.json: {error}")),
    };

    match portfolio {
        Ok(portfolio) => {
            *store.borrow_mut() = LoadState::Ready(WebApp::new(portfolio, BrowserNavigator::new()));
        }
        Err(error) => fail(format!("Invalid portfolio.json: {error}")),
    }
}
