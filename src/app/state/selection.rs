/// Auswahlbezogener Anwendungszustand.
///
/// Höchstens ein Punkt ist selektiert (laufender Drag). Der Index ist ein
/// einfacher Verweis in die Punktliste und kann nach einer Löschung veraltet
/// sein; Zugriffe gehen deshalb über [`SelectionState::valid_index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn select(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Roher Index ohne Prüfung (nur für Anzeige).
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Selektierter Index, sofern er für eine Liste mit `len` Punkten gültig ist.
    pub fn valid_index(&self, len: usize) -> Option<usize> {
        self.selected_index.filter(|&index| index < len)
    }
}
