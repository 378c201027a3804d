//! Status-Bar am unteren Bildschirmrand.

use crate::app::state::point_label;
use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let count = state.point_count();
            ui.label(format!("Points: {}", count));

            ui.separator();

            match state.points.degree() {
                Some(degree) => ui.label(format!("Degree: {}", degree)),
                None => ui.label("Degree: -"),
            };

            ui.separator();

            match state.selection.valid_index(count) {
                Some(index) => {
                    let label = point_label(index);
                    match state.points.get(index) {
                        Some(p) => ui.label(format!("Dragging: {} ({:.2}, {:.2})", label, p.x, p.y)),
                        None => ui.label(format!("Dragging: {}", label)),
                    }
                }
                None => ui.label("Dragging: -"),
            };

            ui.separator();

            let curve_label = if state.view.curve.is_some() {
                "Curve: shown"
            } else {
                "Curve: hidden"
            };
            ui.label(curve_label);

            // Statusnachricht der letzten Aktion
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
