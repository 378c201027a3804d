//! Top-Menü (File, Edit, View, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Draw Curve").clicked() {
                    events.push(AppIntent::DrawCurveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(!state.points.is_empty(), egui::Button::new("Clear Points"))
                    .clicked()
                {
                    events.push(AppIntent::ClearRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            // Schnellzugriff auf die Anzeige-Schalter der Optionen
            ui.menu_button("View", |ui| {
                let mut options = state.options.clone();
                let mut changed = false;

                changed |= ui.checkbox(&mut options.show_grid, "Grid").changed();
                changed |= ui.checkbox(&mut options.show_labels, "Point Labels").changed();

                if changed {
                    events.push(AppIntent::OptionsChanged { options });
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Bézier Curve Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
