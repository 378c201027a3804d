use crate::app::{AppIntent, UiState};

/// Zeigt die Lösch-Rückfrage für den angefragten Punkt.
///
/// "Yes" bestätigt, "No", Escape oder ein Klick neben den Dialog lehnen ab.
pub fn show_delete_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(request) = ui_state.pending_delete else {
        return events;
    };

    let modal = egui::Modal::new(egui::Id::new("delete_point_dialog")).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.heading("Confirm");
        ui.add_space(8.0);
        ui.label(format!("Delete point {}?", request.label()));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                events.push(AppIntent::DeleteConfirmationAnswered { confirmed: true });
            }
            if ui.button("No").clicked() {
                events.push(AppIntent::DeleteConfirmationAnswered { confirmed: false });
            }
        });
    });

    if events.is_empty() && modal.should_close() {
        events.push(AppIntent::DeleteConfirmationAnswered { confirmed: false });
    }

    events
}
