//! Toolbar: Punkt-Eingabe und Aktionen (Add, Draw, Clear).

use crate::app::{AppIntent, AppState};
use crate::core::POINT_INPUT_HINT;

/// Breite des Eingabefelds in Pixeln.
const INPUT_WIDTH: f32 = 140.0;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Das Eingabefeld schreibt direkt in `state.ui.point_input`; übernommen wird
/// der Text erst über "Add" oder Enter.
pub fn render_toolbar(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Point (X,Y):");

            let input = ui.add(
                egui::TextEdit::singleline(&mut state.ui.point_input)
                    .desired_width(INPUT_WIDTH)
                    .hint_text("2,3"),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            input.on_hover_text(POINT_INPUT_HINT);

            if ui.button("Add").clicked() || submitted {
                events.push(AppIntent::AddPointRequested {
                    text: state.ui.point_input.clone(),
                });
            }

            ui.separator();

            // Zeichnen mit weniger als zwei Punkten bleibt ohne Wirkung
            if ui
                .button("Draw")
                .on_hover_text("At least two points required")
                .clicked()
            {
                events.push(AppIntent::DrawCurveRequested);
            }
            if ui
                .add_enabled(!state.points.is_empty(), egui::Button::new("Clear"))
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }
        });
    });

    events
}
