use crate::app::state::App;
use crossterm::event::KeyCode;
use portfolio_core::Route;

pub fn handle_skills_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => app.focus_next_axis(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => app.focus_prev_axis(),
        KeyCode::Tab => app.next_chart(),
        KeyCode::BackTab => app.prev_chart(),
        KeyCode::Enter => app.activate_axis(app.focused_axis),
        KeyCode::Char('g') => app.go_to(Route::Gallery),
        KeyCode::Char('b') => app.go_back(),
        KeyCode::Esc => app.hover_axis(None),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
