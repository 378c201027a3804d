use crate::shared::EditorOptions;
use glam::DVec2;

/// Maustaste eines Zeiger-Events auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Punkt greifen und ziehen
    Primary,
    /// Rechte Taste: Punkt löschen (mit Bestätigung)
    Secondary,
    /// Mittlere Taste (ohne Funktion)
    Middle,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Punkt aus Texteingabe "X,Y" hinzufügen
    AddPointRequested { text: String },
    /// Maustaste über der Zeichenfläche gedrückt (Pixel relativ zur Zeichenfläche)
    PointerPressed { pixel: DVec2, button: PointerButton },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { pixel: DVec2 },
    /// Maustaste losgelassen
    PointerReleased,
    /// Kurve zeichnen
    DrawCurveRequested,
    /// Alle Punkte entfernen
    ClearRequested,
    /// Antwort auf die Lösch-Rückfrage
    DeleteConfirmationAnswered { confirmed: bool },
    /// Eingabe-Fehlermeldung geschlossen
    InputErrorDismissed,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
