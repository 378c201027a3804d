use glam::DVec2;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Zuletzt gezeichnete Kurve (Welt-Koordinaten); `None` = Kurve ausgeblendet
    pub curve: Option<Arc<[DVec2]>>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (keine Kurve sichtbar).
    pub fn new() -> Self {
        Self { curve: None }
    }

    /// Blendet die Kurve aus; jede Änderung der Punktliste erfordert neues Zeichnen.
    pub fn invalidate_curve(&mut self) {
        if self.curve.take().is_some() {
            log::debug!("Kurve nach Änderung der Punktliste ausgeblendet");
        }
    }
}
