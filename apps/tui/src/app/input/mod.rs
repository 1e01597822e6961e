pub mod helpers;
mod mouse;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyCode, MouseEvent};
use ratatui::layout::Rect;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

/// `area` is the full frame the UI was last drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    mouse::dispatch_mouse(app, mouse, area);
}
