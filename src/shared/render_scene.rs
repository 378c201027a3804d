//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use glam::DVec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct CanvasScene {
    /// Snapshot der Kontrollpunkte in Welt-Koordinaten (Reihenfolge = Polygon)
    pub points: Arc<[DVec2]>,
    /// Abgetastete Kurve in Welt-Koordinaten, nur nach explizitem Zeichnen
    pub curve: Option<Arc<[DVec2]>>,
    /// Index des gerade gezogenen Punkts
    pub selected_index: Option<usize>,
    /// Laufzeit-Optionen für Zeichenfläche, Farben, Größen
    pub options: EditorOptions,
}

/// 1-basierte Anzeige-Bezeichnung eines Punkt-Index ("P1", "P2", …).
pub fn point_label(index: usize) -> String {
    format!("P{}", index + 1)
}

impl CanvasScene {
    /// Gibt zurück, ob eine Kurve dargestellt werden soll.
    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }
}
