//! Anwendungszustand, aufgeteilt nach Zuständigkeit.

mod app_state;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use selection::{ClassifyMode, SelectionState};
pub use ui::UiState;
pub use view::ViewState;
