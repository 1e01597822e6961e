use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod detail;
mod gallery;
mod help;
mod skills;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.search.active {
        gallery::handle_search_input(app, key);
        return;
    }

    match app.screen {
        AppScreen::Skills => skills::handle_skills_input(app, key),
        AppScreen::Gallery if app.is_detail_open() => detail::handle_detail_input(app, key),
        AppScreen::Gallery => gallery::handle_gallery_input(app, key),
    }

    app.sync_route();
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::sample::{sample_catalog, sample_skill_groups};
    use portfolio_core::{enrich_groups, Navigator, Portfolio};
    use std::error::Error;

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

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[test]
    fn radar_keyboard_flow_reaches_detail_and_back() -> Result<(), Box<dyn Error>> {
        let mut app = app("/skills")?;

        // Focus React (axis 3) and activate it.
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Enter]);
        assert_eq!(app.screen, AppScreen::Gallery);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));

        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.is_detail_open());
        assert_eq!(app.navigator.current().to_string(), "/projects");

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen, AppScreen::Skills);
        Ok(())
    }

    #[test]
    fn help_overlay_swallows_keys() -> Result<(), Box<dyn Error>> {
        let mut app = app("/skills")?;
        press(&mut app, &[KeyCode::Char('?'), KeyCode::Char('q')]);
        assert!(app.show_help);
        assert!(app.running);

        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(!app.show_help);
        assert!(!app.running);
        Ok(())
    }

    #[test]
    fn search_typing_does_not_trigger_shortcuts() -> Result<(), Box<dyn Error>> {
        let mut app = app("/projects")?;
        press(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('q'),
                KeyCode::Backspace,
                KeyCode::Char('v'),
                KeyCode::Char('r'),
                KeyCode::Enter,
            ],
        );
        assert!(app.running);
        assert!(!app.search.active);
        assert_eq!(app.search.query, "vr");

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("1"));
        Ok(())
    }

    #[test]
    fn detail_keys_drive_carousel_and_project_switching() -> Result<(), Box<dyn Error>> {
        let mut app = app("/projects?highlight=1")?;

        press(&mut app, &[KeyCode::Char('3')]);
        let current = app
            .gallery
            .as_ref()
            .and_then(|g| g.carousel())
            .and_then(portfolio_core::DetailCarousel::current);
        assert_eq!(current, Some(2));

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(app.navigator.query_param("highlight").as_deref(), Some("2"));

        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('p')]);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("3"));
        Ok(())
    }
}
