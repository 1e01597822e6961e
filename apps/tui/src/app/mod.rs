// App module for portfolio_tui
// Holds screen state, routing and storage-backed actions

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen, DetailTab};
