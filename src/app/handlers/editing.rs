//! Handler für Änderungen an der Punktliste und das Zeichnen der Kurve.

use crate::app::state::point_label;
use crate::app::AppState;
use crate::core::{BezierCurve, CurveError};
use anyhow::Context;
use glam::DVec2;

/// Hängt einen Punkt an und leert das Eingabefeld.
pub fn add_point(state: &mut AppState, point: DVec2) {
    state.points.add(point);
    state.ui.point_input.clear();
    state.view.invalidate_curve();

    let label = point_label(state.points.len() - 1);
    log::info!("{} hinzugefügt: ({}, {})", label, point.x, point.y);
    state.ui.status_message = Some(format!("{} = ({}, {})", label, point.x, point.y));
}

/// Verschiebt den selektierten Punkt an die Weltposition.
///
/// Ohne gültige Selektion (kein Drag oder veralteter Index) passiert nichts.
pub fn move_selected(state: &mut AppState, world_pos: DVec2) -> anyhow::Result<()> {
    let Some(index) = state.selection.valid_index(state.points.len()) else {
        log::debug!("Verschieben ohne gültige Selektion übersprungen");
        return Ok(());
    };

    state
        .points
        .replace_at(index, world_pos)
        .with_context(|| format!("{} verschieben", point_label(index)))?;
    state.view.invalidate_curve();
    Ok(())
}

/// Entfernt einen Punkt. Die Selektion wird verworfen, da Indizes nachrücken.
pub fn remove_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let removed = state
        .points
        .remove_at(index)
        .with_context(|| format!("{} entfernen", point_label(index)))?;
    state.selection.clear();
    state.view.invalidate_curve();

    log::info!(
        "{} entfernt: ({}, {})",
        point_label(index),
        removed.x,
        removed.y
    );
    state.ui.status_message = Some(format!("{} removed", point_label(index)));
    Ok(())
}

/// Entfernt alle Punkte.
pub fn clear_points(state: &mut AppState) {
    let count = state.points.len();
    state.points.clear();
    state.selection.clear();
    state.view.invalidate_curve();

    log::info!("Alle Punkte entfernt ({})", count);
    state.ui.status_message = Some("Canvas cleared".to_string());
}

/// Tastet die Kurve ab und blendet sie ein.
///
/// Mit weniger als zwei Punkten ist das ein stiller No-op.
pub fn draw_curve(state: &mut AppState) {
    let curve = match BezierCurve::new(state.points.points()) {
        Ok(curve) => curve,
        Err(CurveError::InsufficientPoints { count }) => {
            log::debug!("Kurve nicht gezeichnet: nur {} Punkt(e)", count);
            return;
        }
    };

    let samples = curve.sample(state.options.curve_sample_count);
    log::info!(
        "Kurve Grad {} mit {} Stützstellen gezeichnet",
        curve.degree(),
        samples.len()
    );
    state.view.curve = Some(samples.into());
    state.ui.status_message = Some(format!("Curve of degree {}", curve.degree()));
}
