//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet die Clear-Sicherheitsabfrage.
pub fn open_clear_confirmation(state: &mut AppState) {
    state.ui.show_clear_confirmation = true;
}

/// Schließt die Clear-Sicherheitsabfrage.
pub fn close_clear_confirmation(state: &mut AppState) {
    state.ui.show_clear_confirmation = false;
}
