//! Optionen-Dialog für Zeichenfläche, Farben, Größen und Breiten.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{
    CANVAS_SIZE_RANGE, HIT_RADIUS_RANGE, SAMPLE_COUNT_RANGE, SCALE_RANGE,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Zeichenfläche ───────────────────────────────
                    ui.collapsing("Canvas", |ui| {
                        changed |= drag_value(
                            ui,
                            "Width (px):",
                            &mut opts.canvas_width,
                            CANVAS_SIZE_RANGE,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Height (px):",
                            &mut opts.canvas_height,
                            CANVAS_SIZE_RANGE,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Pixels per unit:",
                            &mut opts.scale,
                            SCALE_RANGE,
                            0.5,
                        );
                        ui.label(
                            egui::RichText::new("Changes here hide the drawn curve.")
                                .small()
                                .weak(),
                        );
                    });

                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaction", |ui| {
                        changed |= drag_value(
                            ui,
                            "Hit box radius (px):",
                            &mut opts.hit_radius_px,
                            HIT_RADIUS_RANGE,
                            0.5,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Curve samples:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_sample_count)
                                        .range(SAMPLE_COUNT_RANGE)
                                        .speed(10.0),
                                )
                                .changed();
                        });
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Appearance", |ui| {
                        changed |= ui.checkbox(&mut opts.show_grid, "Show grid").changed();
                        changed |= ui
                            .checkbox(&mut opts.show_labels, "Show point labels")
                            .changed();
                        changed |= drag_value_f32(
                            ui,
                            "Marker radius (px):",
                            &mut opts.marker_radius_px,
                            1.0..=20.0,
                        );
                        changed |= drag_value_f32(
                            ui,
                            "Polygon width (px):",
                            &mut opts.polygon_width_px,
                            0.5..=10.0,
                        );
                        changed |= drag_value_f32(
                            ui,
                            "Curve width (px):",
                            &mut opts.curve_width_px,
                            0.5..=10.0,
                        );
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Colors", |ui| {
                        changed |= color_edit(ui, "Background:", &mut opts.background_color);
                        changed |= color_edit(ui, "Grid:", &mut opts.grid_color);
                        changed |= color_edit(ui, "Axes:", &mut opts.axis_color);
                        changed |= color_edit(ui, "Points:", &mut opts.point_color);
                        changed |= color_edit(
                            ui,
                            "Dragged point:",
                            &mut opts.point_color_selected,
                        );
                        changed |= color_edit(ui, "Control polygon:", &mut opts.polygon_color);
                        changed |= color_edit(ui, "Curve:", &mut opts.curve_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    range: std::ops::RangeInclusive<f64>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

fn drag_value_f32(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(0.1))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = [c.r(), c.g(), c.b(), c.a()].map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
