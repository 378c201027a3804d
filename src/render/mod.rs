//! Darstellung der Zeichenfläche.
//!
//! `primitives` bereitet die Szene UI-unabhängig im Pixelraum auf,
//! `painter` zeichnet das Ergebnis mit egui.

mod painter;
mod primitives;

pub use crate::shared::CanvasScene;
pub use painter::{paint_canvas, to_color32};
pub use primitives::{build_primitives, CanvasPrimitives, LineSegment, Marker, Polyline};
