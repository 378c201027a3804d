pub use crate::shared::point_label;
use glam::DVec2;

/// Offene Lösch-Rückfrage für einen Punkt.
///
/// Merkt sich neben dem Index auch die Position zum Zeitpunkt der Anfrage,
/// damit eine verspätete Bestätigung keinen anderen Punkt entfernt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteRequest {
    /// Index des Punkts in der Liste
    pub index: usize,
    /// Position des Punkts bei Anfrage
    pub point: DVec2,
}

impl DeleteRequest {
    /// 1-basierte Anzeige-Bezeichnung ("P1", "P2", …).
    pub fn label(&self) -> String {
        point_label(self.index)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Inhalt des Eingabefelds für neue Punkte
    pub point_input: String,
    /// Fehlermeldung zur letzten Eingabe (modal angezeigt)
    pub input_error: Option<String>,
    /// Ausstehende Lösch-Rückfrage
    pub pending_delete: Option<DeleteRequest>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            point_input: String::new(),
            input_error: None,
            pending_delete: None,
            status_message: None,
        }
    }

    /// Gibt `true` zurück, solange ein modaler Dialog auf eine Antwort wartet.
    pub fn has_modal_dialog(&self) -> bool {
        self.pending_delete.is_some() || self.input_error.is_some()
    }
}
