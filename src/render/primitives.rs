//! Aufbereitung einer `CanvasScene` zu Zeichenprimitiven im Pixelraum.
//!
//! Reihenfolge entspricht der Zeichenreihenfolge: Gitter, Achsen,
//! Kontrollpolygon, Punkt-Marker, Kurve.

use crate::shared::{point_label, CanvasScene};
use glam::DVec2;

/// Mindestabstand in Pixeln zwischen zwei aufeinanderfolgenden Kurvenpunkten.
const CURVE_MIN_PIXEL_STEP: f64 = 0.5;

/// Gerades Liniensegment in Pixel-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
    pub color: [f32; 4],
    pub width: f32,
}

/// Kontrollpunkt-Marker (gefüllter Kreis mit optionaler Beschriftung).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: DVec2,
    pub radius: f32,
    pub color: [f32; 4],
    pub label: Option<String>,
}

/// Offener Linienzug in Pixel-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<DVec2>,
    pub color: [f32; 4],
    pub width: f32,
}

/// Alle Primitive eines Frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasPrimitives {
    pub background: [f32; 4],
    /// Gitter und Achsen
    pub grid: Vec<LineSegment>,
    /// Verbindungen zwischen aufeinanderfolgenden Kontrollpunkten
    pub polygon: Vec<LineSegment>,
    pub markers: Vec<Marker>,
    /// Kurve, nur nach explizitem Zeichnen
    pub curve: Option<Polyline>,
}

/// Baut die Zeichenprimitive für eine Szene.
pub fn build_primitives(scene: &CanvasScene) -> CanvasPrimitives {
    let opts = &scene.options;
    let mapper = opts.mapper();
    let size = mapper.canvas_size;

    // Punkte werden wie im Raster auf ganze Pixel gesetzt (gleiche Basis wie der Hit-Test)
    let pixels: Vec<DVec2> = scene
        .points
        .iter()
        .map(|&p| mapper.to_pixel_truncated(p))
        .collect();

    let polygon = pixels
        .windows(2)
        .map(|pair| LineSegment {
            from: pair[0],
            to: pair[1],
            color: opts.polygon_color,
            width: opts.polygon_width_px,
        })
        .collect();

    let markers = pixels
        .iter()
        .enumerate()
        .map(|(i, &center)| Marker {
            center,
            radius: opts.marker_radius_px,
            color: if scene.selected_index == Some(i) {
                opts.point_color_selected
            } else {
                opts.point_color
            },
            label: opts.show_labels.then(|| point_label(i)),
        })
        .collect();

    let curve = scene.curve.as_ref().map(|samples| Polyline {
        points: thin_polyline(samples.iter().map(|&p| mapper.to_pixel(p))),
        color: opts.curve_color,
        width: opts.curve_width_px,
    });

    CanvasPrimitives {
        background: opts.background_color,
        grid: build_grid(size, opts.scale, opts.show_grid, opts.grid_color, opts.axis_color),
        polygon,
        markers,
        curve,
    }
}

/// Gitterlinien im Abstand `spacing` ab Pixel 0 plus Achsen durch die Mitte.
fn build_grid(
    size: DVec2,
    spacing: f64,
    show_grid: bool,
    grid_color: [f32; 4],
    axis_color: [f32; 4],
) -> Vec<LineSegment> {
    let mut lines = Vec::new();

    if show_grid && spacing >= 1.0 {
        let mut x = 0.0;
        while x < size.x {
            lines.push(LineSegment {
                from: DVec2::new(x, 0.0),
                to: DVec2::new(x, size.y),
                color: grid_color,
                width: 1.0,
            });
            x += spacing;
        }
        let mut y = 0.0;
        while y < size.y {
            lines.push(LineSegment {
                from: DVec2::new(0.0, y),
                to: DVec2::new(size.x, y),
                color: grid_color,
                width: 1.0,
            });
            y += spacing;
        }
    }

    let center = (size * 0.5).trunc();
    lines.push(LineSegment {
        from: DVec2::new(center.x, 0.0),
        to: DVec2::new(center.x, size.y),
        color: axis_color,
        width: 1.0,
    });
    lines.push(LineSegment {
        from: DVec2::new(0.0, center.y),
        to: DVec2::new(size.x, center.y),
        color: axis_color,
        width: 1.0,
    });

    lines
}

/// Verwirft Punkte, die näher als ein halber Pixel am Vorgänger liegen.
/// Der letzte Punkt bleibt immer erhalten.
fn thin_polyline(points: impl Iterator<Item = DVec2>) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = Vec::new();
    let mut last_skipped: Option<DVec2> = None;

    for p in points {
        match out.last() {
            Some(prev) if prev.distance(p) < CURVE_MIN_PIXEL_STEP => last_skipped = Some(p),
            _ => {
                out.push(p);
                last_skipped = None;
            }
        }
    }
    if let Some(p) = last_skipped {
        out.push(p);
    }
    out
}
