//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CoordinateMapper, DEFAULT_SAMPLE_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Breite der Zeichenfläche in Pixeln.
pub const CANVAS_WIDTH: f64 = 600.0;
/// Höhe der Zeichenfläche in Pixeln.
pub const CANVAS_HEIGHT: f64 = 600.0;
/// Pixel pro Welteinheit (gleichzeitig Gitterabstand).
pub const CANVAS_SCALE: f64 = 20.0;

/// Zulässige Kantenlänge der Zeichenfläche in Pixeln.
pub const CANVAS_SIZE_RANGE: RangeInclusive<f64> = 100.0..=4000.0;
/// Zulässiger Maßstab in Pixeln pro Welteinheit.
pub const SCALE_RANGE: RangeInclusive<f64> = 1.0..=200.0;
/// Zulässige Anzahl Stützstellen der Kurve.
pub const SAMPLE_COUNT_RANGE: RangeInclusive<usize> = 2..=100_001;

// ── Selektion ───────────────────────────────────────────────────────

/// Halbbreite der quadratischen Hitbox in Pixeln.
pub const HIT_RADIUS_PX: f64 = 10.0;
/// Zulässige Halbbreite der Hitbox in Pixeln.
pub const HIT_RADIUS_RANGE: RangeInclusive<f64> = 1.0..=50.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 5.0;
/// Linienstärke des Kontrollpolygons.
pub const POLYGON_WIDTH_PX: f32 = 1.0;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH_PX: f32 = 1.5;
/// Hintergrund (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Gitterlinien (RGBA: Hellgrau).
pub const GRID_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
/// Achsen (RGBA: Schwarz).
pub const AXIS_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Kontrollpunkte und Beschriftung (RGBA: Blau).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Selektierter Punkt während Drag (RGBA: Magenta).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Kontrollpolygon (RGBA: Orange).
pub const POLYGON_COLOR: [f32; 4] = [1.0, 0.78, 0.0, 1.0];
/// Kurve (RGBA: Rot).
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Breite der Zeichenfläche in Pixeln
    pub canvas_width: f64,
    /// Höhe der Zeichenfläche in Pixeln
    pub canvas_height: f64,
    /// Pixel pro Welteinheit
    pub scale: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Halbbreite der Hitbox in Pixeln
    pub hit_radius_px: f64,
    /// Anzahl Stützstellen der Kurve
    pub curve_sample_count: usize,

    // ── Darstellung ─────────────────────────────────────────────
    pub show_grid: bool,
    pub show_labels: bool,
    pub marker_radius_px: f32,
    pub polygon_width_px: f32,
    pub curve_width_px: f32,
    pub background_color: [f32; 4],
    pub grid_color: [f32; 4],
    pub axis_color: [f32; 4],
    pub point_color: [f32; 4],
    pub point_color_selected: [f32; 4],
    pub polygon_color: [f32; 4],
    pub curve_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            scale: CANVAS_SCALE,

            hit_radius_px: HIT_RADIUS_PX,
            curve_sample_count: DEFAULT_SAMPLE_COUNT,

            show_grid: true,
            show_labels: true,
            marker_radius_px: MARKER_RADIUS_PX,
            polygon_width_px: POLYGON_WIDTH_PX,
            curve_width_px: CURVE_WIDTH_PX,
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            axis_color: AXIS_COLOR,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            polygon_color: POLYGON_COLOR,
            curve_color: CURVE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Korrigiert Werte, die Abbildung oder Abtastung unbrauchbar machen würden.
    ///
    /// Nicht-endliche Werte fallen auf den Standard zurück, alle übrigen werden
    /// auf dieselben Bereiche begrenzt wie im Options-Dialog.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.canvas_width = clamp_or(self.canvas_width, &CANVAS_SIZE_RANGE, defaults.canvas_width);
        self.canvas_height =
            clamp_or(self.canvas_height, &CANVAS_SIZE_RANGE, defaults.canvas_height);
        self.scale = clamp_or(self.scale, &SCALE_RANGE, defaults.scale);
        self.hit_radius_px =
            clamp_or(self.hit_radius_px, &HIT_RADIUS_RANGE, defaults.hit_radius_px);
        self.curve_sample_count = self
            .curve_sample_count
            .clamp(*SAMPLE_COUNT_RANGE.start(), *SAMPLE_COUNT_RANGE.end());
        self
    }

    /// Koordinaten-Abbildung für die konfigurierte Zeichenfläche.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.canvas_width, self.canvas_height, self.scale)
    }
}

/// Begrenzt `value` auf `range`; nicht-endliche und nicht-positive Werte werden zu `fallback`.
fn clamp_or(value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
