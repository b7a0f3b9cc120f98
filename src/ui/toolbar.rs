//! Toolbar mit Clear-Button und Hinweis zum Verbindungszustand.

use crate::app::{AppIntent, AppState};
use crate::core::SessionState;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.session.state() {
                SessionState::Idle => {
                    ui.label("Startpunkt wählen");
                }
                SessionState::Pending => {
                    if let Some(p) = state.session.pending() {
                        ui.label(format!(
                            "Startpunkt: ({}, {}) → Nächsten Punkt wählen (Rechtsklick bricht ab)",
                            p.row, p.column
                        ));
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Offene Clear-Abfrage sperrt beide Buttons
                let dialog_open = state.ui.show_clear_confirmation;

                let clear_btn = egui::Button::new(
                    egui::RichText::new("Clear").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::RED)
                .min_size(egui::vec2(80.0, 30.0));

                if ui.add_enabled(!dialog_open, clear_btn).clicked() {
                    events.push(AppIntent::ClearRequested);
                }

                if ui
                    .add_enabled(
                        state.can_undo() && !dialog_open,
                        egui::Button::new("↶ Undo (Ctrl+Z)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                }
            });
        });
    });

    events
}
