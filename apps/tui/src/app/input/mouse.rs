use crate::app::state::{App, AppScreen};
use crate::ui::layout::{card_at, detail_popup, screen_layout, skills_layout};
use crate::ui::screens::gallery::gallery_areas;
use crate::ui::screens::skills::skill_row_at;
use crate::ui::widgets::radar::hit_test;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

pub fn dispatch_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }

    match app.screen {
        AppScreen::Skills => handle_skills_mouse(app, mouse, area),
        AppScreen::Gallery if app.is_detail_open() => handle_detail_mouse(app, mouse, area),
        AppScreen::Gallery => handle_gallery_mouse(app, mouse, area),
    }

    app.sync_route();
}

fn handle_skills_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    let Some(chart) = app.active_chart() else {
        return;
    };
    let areas = skills_layout(screen_layout(area).body);
    let hit = hit_test(chart, areas.radar, mouse.column, mouse.row)
        .or_else(|| {
            skill_row_at(
                areas.list,
                mouse.row,
                mouse.column,
                chart.len(),
                app.focused_axis,
            )
        });

    match mouse.kind {
        MouseEventKind::Moved => app.hover_axis(hit),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = hit {
                app.activate_axis(index);
            }
        }
        MouseEventKind::ScrollDown => app.focus_next_axis(),
        MouseEventKind::ScrollUp => app.focus_prev_axis(),
        _ => {}
    }
}

fn handle_gallery_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (_, cards) = gallery_areas(app, screen_layout(area).body);
            let count = app.visible_projects().len();
            if let Some(index) = card_at(cards, count, app.focused_card, mouse.column, mouse.row) {
                app.focused_card = index;
                app.open_focused_card();
            }
        }
        MouseEventKind::ScrollDown => app.focus_next_card(),
        MouseEventKind::ScrollUp => app.focus_prev_card(),
        _ => {}
    }
}

fn handle_detail_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let popup = detail_popup(area);
            if !popup.contains(Position::new(mouse.column, mouse.row)) {
                app.close_detail();
            }
        }
        MouseEventKind::ScrollDown => app.carousel_next(),
        MouseEventKind::ScrollUp => app.carousel_prev(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::card_grid;
    use crate::ui::widgets::radar::{radar_block, RadarGeometry};
    use crossterm::event::KeyModifiers;
    use portfolio_core::sample::{sample_catalog, sample_skill_groups};
    use portfolio_core::{enrich_groups, Navigator, Portfolio, Route};
    use std::error::Error;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn app(location: &str) -> Result<App, Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let skill_groups = enrich_groups(&sample_skill_groups()?, &catalog);
        Ok(App::new(
            Portfolio {
                catalog,
                skill_groups,
            },
            location,
        ))
    }

    fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn vertex(app: &App, index: usize) -> Result<(u16, u16), Box<dyn Error>> {
        let chart = app.active_chart().ok_or("no chart")?;
        let radar = skills_layout(screen_layout(FRAME).body).radar;
        let geometry = RadarGeometry::new(radar_block(chart.title()).inner(radar))
            .ok_or("radar too small")?;
        Ok(geometry.vertex_cell(chart, index).ok_or("no vertex")?)
    }

    #[test]
    fn hover_then_click_on_radar_point() -> Result<(), Box<dyn Error>> {
        let mut app = app("/skills")?;
        // React, used by projects 2 and 3
        let (column, row) = vertex(&app, 3)?;

        dispatch_mouse(&mut app, event(MouseEventKind::Moved, column, row), FRAME);
        assert_eq!(app.focused_axis, 3);
        assert_eq!(app.active_chart().and_then(|c| c.emphasized()), Some(3));

        dispatch_mouse(
            &mut app,
            event(MouseEventKind::Down(MouseButton::Left), column, row),
            FRAME,
        );
        assert_eq!(app.screen, AppScreen::Gallery);
        assert_eq!(app.navigator.current().to_string(), "/projects?highlight=2");
        Ok(())
    }

    #[test]
    fn click_on_empty_radar_space_does_nothing() -> Result<(), Box<dyn Error>> {
        let mut app = app("/skills")?;
        let radar = skills_layout(screen_layout(FRAME).body).radar;
        dispatch_mouse(
            &mut app,
            event(MouseEventKind::Down(MouseButton::Left), radar.x + 2, radar.y + 2),
            FRAME,
        );
        assert_eq!(app.navigator.current().route(), Some(Route::Skills));
        Ok(())
    }

    #[test]
    fn card_click_opens_detail_and_outside_click_closes() -> Result<(), Box<dyn Error>> {
        let mut app = app("/projects")?;
        let body = screen_layout(FRAME).body;
        let (_, card) = card_grid(body, app.catalog.len(), 0)[2];

        dispatch_mouse(
            &mut app,
            event(MouseEventKind::Down(MouseButton::Left), card.x + 2, card.y + 2),
            FRAME,
        );
        assert!(app.is_detail_open());
        assert_eq!(app.focused_card, 2);
        assert_eq!(app.navigator.current().to_string(), "/projects?highlight=3");

        dispatch_mouse(&mut app, event(MouseEventKind::ScrollDown, 60, 20), FRAME);
        assert_eq!(
            app.gallery
                .as_ref()
                .and_then(|g| g.carousel())
                .and_then(|c| c.current()),
            Some(1)
        );

        dispatch_mouse(
            &mut app,
            event(MouseEventKind::Down(MouseButton::Left), 0, 0),
            FRAME,
        );
        assert!(!app.is_detail_open());
        assert_eq!(app.navigator.current().to_string(), "/projects");
        Ok(())
    }

    #[test]
    fn click_closes_help_only() -> Result<(), Box<dyn Error>> {
        let mut app = app("/projects")?;
        app.show_help = true;
        let body = screen_layout(FRAME).body;
        let (_, card) = card_grid(body, app.catalog.len(), 0)[0];

        dispatch_mouse(
            &mut app,
            event(MouseEventKind::Down(MouseButton::Left), card.x + 2, card.y + 2),
            FRAME,
        );
        assert!(!app.show_help);
        assert!(!app.is_detail_open());
        Ok(())
    }
}
