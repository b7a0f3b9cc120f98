//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, clear_dialog_open: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_z_pressed, key_q_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Undo (Cmd/Ctrl + Z); Shift+Cmd+Z bleibt unbelegt
    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    if key_escape_pressed {
        if clear_dialog_open {
            // Offene Sicherheitsabfrage → als "No" behandeln
            events.push(AppIntent::ClearCancelled);
        } else {
            events.push(AppIntent::ResetRequested);
        }
    }

    events
}
