//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::CanvasScene;

/// Baut eine CanvasScene aus dem aktuellen AppState.
///
/// Punkte werden kopiert, die Kurve per `Arc` geteilt: der Renderer arbeitet
/// auf einem Snapshot, unabhängig von späteren Mutationen.
pub fn build(state: &AppState) -> CanvasScene {
    CanvasScene {
        points: state.points.points().into(),
        curve: state.view.curve.clone(),
        selected_index: state.selection.valid_index(state.points.len()),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::DVec2;

    #[test]
    fn build_snapshots_points_and_drops_stale_selection() {
        let mut state = AppState::new();
        state.points.add(DVec2::new(1.0, 2.0));
        state.points.add(DVec2::new(3.0, 4.0));
        state.selection.select(5);

        let scene = build(&state);
        state.points.clear();

        assert_eq!(
            &*scene.points,
            &[DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]
        );
        assert_eq!(scene.selected_index, None);
        assert!(!scene.has_curve());
    }
}
