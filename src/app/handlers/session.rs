//! Handler für die Verbindungs-Sitzung: Punkt wählen, Reset, Undo, Clear.

use crate::app::AppState;
use crate::core::PointId;

/// Wählt einen Gitterpunkt über seine Id.
///
/// Eine Id außerhalb des Gitters ist ein Fehler; der Zustand bleibt unverändert.
pub fn select_point(state: &mut AppState, point: PointId) -> anyhow::Result<()> {
    let Some(grid_point) = state.grid.point(point) else {
        anyhow::bail!(
            "Punkt {} existiert nicht im Gitter ({} Punkte)",
            point.0,
            state.grid.len()
        );
    };

    match state.session.select_point(grid_point) {
        Some(segment) => log::info!(
            "Segment ({}, {}) → ({}, {}) festgeschrieben",
            segment.start.row,
            segment.start.column,
            segment.end.row,
            segment.end.column
        ),
        None => log::info!(
            "Startpunkt ({}, {}) gewählt",
            grid_point.row,
            grid_point.column
        ),
    }

    state.ui.status_message = None;
    Ok(())
}

/// Verwirft den ausstehenden Punkt.
pub fn reset(state: &mut AppState) {
    if state.session.pending().is_some() {
        state.session.reset();
        log::info!("Ausstehender Punkt verworfen");
    } else {
        log::debug!("Reset: kein ausstehender Punkt");
    }
}

/// Entfernt das zuletzt festgeschriebene Segment, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if state.session.undo().is_some() {
        log::info!(
            "Undo ausgeführt ({} Segmente verbleiben)",
            state.session.segment_count()
        );
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Löscht alle Segmente und den ausstehenden Punkt.
pub fn clear(state: &mut AppState) {
    let removed = state.session.segment_count();
    state.session.clear();
    state.ui.status_message = Some(format!("{} Segmente gelöscht", removed));
    log::info!("Clear: {} Segmente gelöscht", removed);
}
