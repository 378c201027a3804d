use crate::app::{AppIntent, UiState};

/// Zeigt die Fehlermeldung zur letzten Punkt-Eingabe.
pub fn show_input_error_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.input_error.as_deref() else {
        return events;
    };

    let modal = egui::Modal::new(egui::Id::new("input_error_dialog")).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.heading("Invalid input");
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message).color(egui::Color32::RED));
        ui.add_space(12.0);

        if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            events.push(AppIntent::InputErrorDismissed);
        }
    });

    if events.is_empty() && modal.should_close() {
        events.push(AppIntent::InputErrorDismissed);
    }

    events
}
