use super::{SelectionState, UiState, ViewState};
use crate::app::CommandLog;
use crate::core::{ControlPointStore, CoordinateMapper};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte der Kurve
    pub points: ControlPointStore,
    /// Selection-State (laufender Drag)
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Zeichenfläche, Farben, Größen)
    pub options: EditorOptions,
    /// Speicherort der Optionen-Datei
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            points: ControlPointStore::new(),
            selection: SelectionState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            options_path: EditorOptions::config_path(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Koordinaten-Abbildung für die aktuelle Zeichenfläche.
    pub fn mapper(&self) -> CoordinateMapper {
        self.options.mapper()
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
