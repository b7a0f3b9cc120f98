//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::PointId;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// `armed` ist der transiente Gedrückt-Zustand aus dem Input-Layer und
/// gehört nicht zum Datenmodell.
pub fn build(state: &AppState, armed: Option<PointId>) -> RenderScene {
    RenderScene {
        grid: state.grid.clone(),
        segments: state.session.segments().to_vec(),
        pending: state.session.pending(),
        armed,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::PointId;
    use std::sync::Arc;

    #[test]
    fn build_reflects_session_and_shares_grid() {
        let mut state = AppState::new();
        let a = state.grid.point(PointId(0)).expect("Punkt 0");
        let b = state.grid.point(PointId(1)).expect("Punkt 1");
        state.session.select_point(a);
        state.session.select_point(b);

        let scene = build(&state, Some(PointId(5)));

        assert!(Arc::ptr_eq(&scene.grid, &state.grid));
        assert_eq!(scene.segments.len(), 1);
        assert!(scene.has_segments());
        assert_eq!(scene.pending, Some(b));
        assert_eq!(scene.armed, Some(PointId(5)));
    }
}
