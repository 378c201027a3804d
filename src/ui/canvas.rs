//! Zentrale Zeichenfläche: Input sammeln und Szene zeichnen.

use super::input::InputState;
use crate::app::AppIntent;
use crate::render::{self, CanvasScene};

/// Rendert die Zeichenfläche in fester Größe und gibt erzeugte Events zurück.
///
/// Ist das Fenster kleiner als die Zeichenfläche, wird gescrollt; die
/// Pixel-Abbildung bleibt dadurch unverändert.
pub fn render_canvas(
    ctx: &egui::Context,
    scene: &CanvasScene,
    input: &mut InputState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let size = scene.options.mapper().canvas_size;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(size.x as f32, size.y as f32),
                egui::Sense::click_and_drag(),
            );

            events.extend(input.collect_canvas_events(ui, &response));

            let primitives = render::build_primitives(scene);
            render::paint_canvas(ui.painter(), rect, &primitives);
        });
    });

    events
}
