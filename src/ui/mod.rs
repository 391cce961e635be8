//! UI-Layer mit egui: Menü, Toolbar, Status, Input-Handling, Dialoge.

pub mod dialogs;
mod drag;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
