//! UI-Komponenten: Toolbar, Status-Bar, Dialoge, Input-Handling.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use dialogs::show_clear_confirmation;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
