//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{parse_point, POINT_INPUT_HINT};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPointRequested { text } => match parse_point(&text) {
            Ok(point) => vec![AppCommand::AddPoint { point }],
            Err(e) => {
                log::debug!("Punkt-Eingabe '{}' abgelehnt: {}", text, e);
                vec![AppCommand::ReportInputError {
                    message: POINT_INPUT_HINT.to_string(),
                }]
            }
        },
        AppIntent::PointerPressed { pixel, button } => {
            // Modale Rückfrage offen → Zeichenfläche gesperrt
            if state.ui.has_modal_dialog() {
                return vec![];
            }
            let hit = state
                .points
                .hit_test(pixel, &state.mapper(), state.options.hit_radius_px);
            match (button, hit) {
                (PointerButton::Primary, Some(index)) => vec![AppCommand::SelectPoint { index }],
                (PointerButton::Secondary, Some(index)) => {
                    vec![AppCommand::RequestDeleteConfirmation { index }]
                }
                _ => vec![],
            }
        }
        AppIntent::PointerDragged { pixel } => {
            if state.selection.valid_index(state.point_count()).is_some() {
                vec![AppCommand::MoveSelectedPoint {
                    world_pos: state.mapper().to_world(pixel),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::ClearSelection],
        AppIntent::DrawCurveRequested => vec![AppCommand::DrawCurve],
        AppIntent::ClearRequested => vec![AppCommand::ClearPoints],
        AppIntent::DeleteConfirmationAnswered { confirmed } => {
            let Some(request) = state.ui.pending_delete else {
                log::warn!("Lösch-Antwort ohne offene Rückfrage ignoriert");
                return vec![];
            };
            if !confirmed {
                return vec![AppCommand::CloseDeleteConfirmation];
            }
            // Index erneut prüfen: die Liste kann sich seit der Anfrage geändert haben
            if state.points.get(request.index) == Some(request.point) {
                vec![
                    AppCommand::RemovePoint {
                        index: request.index,
                    },
                    AppCommand::CloseDeleteConfirmation,
                ]
            } else {
                log::warn!(
                    "Lösch-Rückfrage für {} veraltet, Punkt nicht entfernt",
                    request.label()
                );
                vec![AppCommand::CloseDeleteConfirmation]
            }
        }
        AppIntent::InputErrorDismissed => vec![AppCommand::DismissInputError],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
