//! Handler für Dialog-Sichtbarkeit, Rückfragen und Anwendungssteuerung.

use crate::app::state::{point_label, DeleteRequest};
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Zeigt eine Fehlermeldung zur Eingabe an; die Punktliste bleibt unverändert.
pub fn report_input_error(state: &mut AppState, message: String) {
    log::info!("Ungültige Eingabe: {}", message);
    state.ui.input_error = Some(message);
}

/// Schließt die Eingabe-Fehlermeldung.
pub fn dismiss_input_error(state: &mut AppState) {
    state.ui.input_error = None;
}

/// Öffnet die Lösch-Rückfrage für einen Punkt.
pub fn request_delete_confirmation(state: &mut AppState, index: usize) {
    let Some(point) = state.points.get(index) else {
        log::warn!("Lösch-Rückfrage für {} ignoriert: Index ungültig", point_label(index));
        return;
    };
    let request = DeleteRequest { index, point };
    log::debug!("Lösch-Rückfrage für {} geöffnet", request.label());
    state.ui.pending_delete = Some(request);
}

/// Schließt die Lösch-Rückfrage.
pub fn close_delete_confirmation(state: &mut AppState) {
    state.ui.pending_delete = None;
}

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie.
///
/// Eine geänderte Zeichenfläche verschiebt alle Pixelpositionen; die
/// gezeichnete Kurve und eine laufende Selektion werden deshalb verworfen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let options = options.sanitized();
    if options.mapper() != state.options.mapper()
        || options.curve_sample_count != state.options.curve_sample_count
    {
        state.selection.clear();
        state.view.invalidate_curve();
    }
    state.options = options;
    state.options.save_to_file(&state.options_path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Signalisiert dem Host das Beenden der Anwendung.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
