//! Geordnete Liste der Kontrollpunkte (einzige Quelle der Kurvenform).

use super::coords::CoordinateMapper;
use glam::DVec2;
use thiserror::Error;

/// Fehler bei Zugriffen auf die Kontrollpunkt-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Index außerhalb der Liste (veralteter oder ungültiger Index)
    #[error("Kontrollpunkt-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Geordnete Kontrollpunkte in Welt-Koordinaten.
///
/// Die Position in der Liste bestimmt Parametrisierung und Reihenfolge des
/// Kontrollpolygons. Duplikate sind erlaubt. Der Store kennt keine Selektion;
/// Aufrufer müssen gehaltene Indizes nach `remove_at` selbst verwerfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointStore {
    points: Vec<DVec2>,
}

impl ControlPointStore {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an das Ende an.
    pub fn add(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// Entfernt den Punkt an `index`; nachfolgende Indizes rücken um eins nach vorn.
    pub fn remove_at(&mut self, index: usize) -> Result<DVec2, StoreError> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    /// Überschreibt den Punkt an `index` (Drag-Verschieben).
    pub fn replace_at(&mut self, index: usize, point: DVec2) -> Result<DVec2, StoreError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.points[index], point))
    }

    /// Leert die Liste.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kurvengrad der aktuellen Liste (`None` bei weniger als 2 Punkten).
    pub fn degree(&self) -> Option<usize> {
        (self.points.len() >= 2).then(|| self.points.len() - 1)
    }

    /// Sucht den ersten Punkt, dessen Pixel-Position innerhalb einer
    /// achsenparallelen Box mit Halbbreite `radius_px` um `pixel` liegt.
    ///
    /// Punkte werden auf ganze Pixel abgeschnitten projiziert und pro Achse
    /// strikt (`<`) verglichen. Bei Überlappung gewinnt der niedrigste Index.
    pub fn hit_test(
        &self,
        pixel: DVec2,
        mapper: &CoordinateMapper,
        radius_px: f64,
    ) -> Option<usize> {
        self.points.iter().position(|&point| {
            let delta = (mapper.to_pixel_truncated(point) - pixel).abs();
            delta.x < radius_px && delta.y < radius_px
        })
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}
