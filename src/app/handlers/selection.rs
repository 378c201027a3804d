//! Handler für die Drag-Selektion.

use crate::app::state::point_label;
use crate::app::AppState;

/// Selektiert einen Punkt als Drag-Ziel.
pub fn select(state: &mut AppState, index: usize) {
    if index >= state.points.len() {
        log::warn!("Selektion von {} ignoriert: Index ungültig", point_label(index));
        return;
    }
    state.selection.select(index);
    log::debug!("{} selektiert", point_label(index));
}

/// Hebt die Selektion auf (Maustaste losgelassen).
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
