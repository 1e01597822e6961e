use crate::app::input::helpers::digit_index;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Char('l') => app.carousel_next(),
        KeyCode::Left | KeyCode::Char('h') => app.carousel_prev(),
        KeyCode::Tab => app.detail_tab = app.detail_tab.next(),
        KeyCode::BackTab => app.detail_tab = app.detail_tab.prev(),
        KeyCode::Char('n') | KeyCode::Down => app.select_adjacent_project(true),
        KeyCode::Char('p') | KeyCode::Up => app.select_adjacent_project(false),
        KeyCode::Char(ch) if digit_index(ch).is_some() => {
            if let Some(index) = digit_index(ch) {
                app.carousel_jump(index);
            }
        }
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
