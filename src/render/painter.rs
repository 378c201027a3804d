//! Zeichnet `CanvasPrimitives` mit dem egui-Painter.

use super::primitives::{CanvasPrimitives, LineSegment};
use glam::DVec2;

/// Umrechnung RGBA (0.0–1.0) → egui-Farbe.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Zeichnet alle Primitive in `rect` (linke obere Ecke = Pixel (0, 0)).
pub fn paint_canvas(painter: &egui::Painter, rect: egui::Rect, primitives: &CanvasPrimitives) {
    let to_screen = |p: DVec2| egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32);
    let painter = painter.with_clip_rect(rect);

    painter.rect_filled(rect, 0.0, to_color32(primitives.background));

    // Gitter und Achsen unter dem Kontrollpolygon
    for line in primitives.grid.iter().chain(&primitives.polygon) {
        paint_segment(&painter, line, to_screen);
    }

    for marker in &primitives.markers {
        let center = to_screen(marker.center);
        let color = to_color32(marker.color);
        painter.circle_filled(center, marker.radius, color);
        if let Some(label) = &marker.label {
            painter.text(
                center + egui::vec2(marker.radius, -marker.radius),
                egui::Align2::LEFT_BOTTOM,
                label,
                egui::FontId::proportional(12.0),
                color,
            );
        }
    }

    if let Some(curve) = &primitives.curve {
        let points: Vec<egui::Pos2> = curve.points.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(curve.width, to_color32(curve.color)),
        ));
    }
}

fn paint_segment(
    painter: &egui::Painter,
    line: &LineSegment,
    to_screen: impl Fn(DVec2) -> egui::Pos2,
) {
    painter.line_segment(
        [to_screen(line.from), to_screen(line.to)],
        egui::Stroke::new(line.width, to_color32(line.color)),
    );
}
