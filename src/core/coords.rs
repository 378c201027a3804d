//! Umrechnung zwischen Pixel-Koordinaten der Zeichenfläche und Welt-Koordinaten.

use glam::DVec2;

/// Bidirektionale Abbildung Pixel ↔ Welt für eine Zeichenfläche fester Größe.
///
/// Der Welt-Ursprung liegt in der Mitte der Zeichenfläche, die Welt-Y-Achse
/// zeigt nach oben (Raster-Y zeigt nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub canvas_size: DVec2,
    /// Pixel pro Welteinheit
    pub scale: f64,
}

impl CoordinateMapper {
    /// Erstellt einen Mapper für die gegebene Zeichenfläche.
    pub fn new(canvas_width: f64, canvas_height: f64, scale: f64) -> Self {
        Self {
            canvas_size: DVec2::new(canvas_width, canvas_height),
            scale,
        }
    }

    /// Mittelpunkt der Zeichenfläche in Pixeln (= Welt-Ursprung).
    pub fn origin_pixel(&self) -> DVec2 {
        self.canvas_size * 0.5
    }

    /// Welt → Pixel
    pub fn to_pixel(&self, world: DVec2) -> DVec2 {
        let half = self.origin_pixel();
        DVec2::new(world.x * self.scale + half.x, half.y - world.y * self.scale)
    }

    /// Pixel → Welt
    pub fn to_world(&self, pixel: DVec2) -> DVec2 {
        let half = self.origin_pixel();
        DVec2::new(
            (pixel.x - half.x) / self.scale,
            (half.y - pixel.y) / self.scale,
        )
    }

    /// Welt → Pixel, abgeschnitten auf ganze Pixel (wie das Raster die Punkte platziert).
    pub fn to_pixel_truncated(&self, world: DVec2) -> DVec2 {
        self.to_pixel(world).trunc()
    }
}
