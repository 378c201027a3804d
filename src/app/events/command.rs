use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt am Ende der Liste anhängen
    AddPoint { point: DVec2 },
    /// Benutzer auf fehlerhafte Eingabe hinweisen (Zustand bleibt unverändert)
    ReportInputError { message: String },
    /// Eingabe-Fehlermeldung schließen
    DismissInputError,
    /// Punkt für Drag selektieren
    SelectPoint { index: usize },
    /// Selektion aufheben
    ClearSelection,
    /// Selektierten Punkt an Weltposition verschieben
    MoveSelectedPoint { world_pos: DVec2 },
    /// Lösch-Rückfrage für einen Punkt anfordern
    RequestDeleteConfirmation { index: usize },
    /// Punkt entfernen (nach bestätigter Rückfrage)
    RemovePoint { index: usize },
    /// Lösch-Rückfrage schließen
    CloseDeleteConfirmation,
    /// Alle Punkte entfernen
    ClearPoints,
    /// Kurve abtasten und anzeigen
    DrawCurve,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
