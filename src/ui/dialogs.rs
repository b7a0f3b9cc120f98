//! Modale Fenster.

use crate::app::AppIntent;

/// Zeigt die Clear-Sicherheitsabfrage als modales Fenster.
pub fn show_clear_confirmation(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    egui::Window::new("CLEAR")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label("Are you sure you want to clear?");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        events.push(AppIntent::ClearConfirmed);
                    }

                    if ui.button("No").clicked() {
                        events.push(AppIntent::ClearCancelled);
                    }
                });
            });
        });

    events
}
