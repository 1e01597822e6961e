use crate::app::state::App;
use crossterm::event::KeyCode;
use portfolio_core::Route;

pub fn handle_gallery_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => app.focus_next_card(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => app.focus_prev_card(),
        KeyCode::Enter => app.open_focused_card(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc if !app.search.query.is_empty() => app.clear_search(),
        KeyCode::Esc | KeyCode::Char('s') => app.go_to(Route::Skills),
        KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.finish_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => {
            let mut query = app.search.query.clone();
            query.pop();
            app.update_search(query);
        }
        KeyCode::Char(ch) => {
            let query = format!("{}{ch}", app.search.query);
            app.update_search(query);
        }
        _ => {}
    }
}
