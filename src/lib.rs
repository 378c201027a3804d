//! Bézier Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DeleteRequest, PointerButton, UiState,
    ViewState,
};
pub use core::{
    binomial, evaluate, parse_point, BezierCurve, ControlPointStore, CoordinateMapper, CurveError,
    PointParseError, StoreError, DEFAULT_SAMPLE_COUNT,
};
pub use shared::{CanvasScene, EditorOptions};
