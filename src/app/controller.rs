//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CanvasScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punktliste & Kurve ===
            AppCommand::AddPoint { point } => handlers::editing::add_point(state, point),
            AppCommand::MoveSelectedPoint { world_pos } => {
                handlers::editing::move_selected(state, world_pos)?
            }
            AppCommand::RemovePoint { index } => handlers::editing::remove_point(state, index)?,
            AppCommand::ClearPoints => handlers::editing::clear_points(state),
            AppCommand::DrawCurve => handlers::editing::draw_curve(state),

            // === Selektion ===
            AppCommand::SelectPoint { index } => handlers::selection::select(state, index),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ReportInputError { message } => {
                handlers::dialog::report_input_error(state, message)
            }
            AppCommand::DismissInputError => handlers::dialog::dismiss_input_error(state),
            AppCommand::RequestDeleteConfirmation { index } => {
                handlers::dialog::request_delete_confirmation(state, index)
            }
            AppCommand::CloseDeleteConfirmation => {
                handlers::dialog::close_delete_confirmation(state)
            }
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> CanvasScene {
        render_scene::build(state)
    }
}
