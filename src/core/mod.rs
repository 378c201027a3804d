//! Core-Domäne: Kontrollpunkte, Koordinaten-Abbildung, Bézier-Auswertung.
//!
//! Frei von UI-Abhängigkeiten; wird von `app` (Interaktion) und `render`
//! (Darstellung) gemeinsam genutzt.

pub mod bezier;
pub mod control_points;
pub mod coords;
pub mod point_input;

pub use bezier::{binomial, evaluate, BezierCurve, CurveError, DEFAULT_SAMPLE_COUNT};
pub use control_points::{ControlPointStore, StoreError};
pub use coords::CoordinateMapper;
pub use point_input::{parse_point, PointParseError, POINT_INPUT_HINT};
