//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CANVAS_HEIGHT, CANVAS_SCALE, CANVAS_WIDTH, HIT_RADIUS_PX};
pub use render_scene::{point_label, CanvasScene};
