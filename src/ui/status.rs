//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Segments: {}", state.segment_count()));

            ui.separator();

            match state.session.pending() {
                Some(p) => ui.label(format!("Pending: ({}, {})", p.row, p.column)),
                None => ui.label("Pending: none"),
            };

            ui.separator();

            let layout = state.grid.layout();
            ui.label(format!(
                "Grid: {} × {} ({} Punkte)",
                layout.rows,
                layout.columns,
                state.grid.len()
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
