//! Zeichenflächen-Input: Maus-Events → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Tastendruck auf der Zeichenfläche (Greifen, Lösch-Rückfrage)
//! - `drag_primary`: Zeigerbewegung bei gedrückter Taste und Loslassen

mod clicks;
mod drag_primary;

use crate::app::AppIntent;
use glam::DVec2;

/// Bündelt die gemeinsamen Parameter für die Event-Verarbeitung eines Frames.
pub(crate) struct CanvasContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
}

/// Verwaltet den Input-Zustand der Zeichenfläche über Frames hinweg.
#[derive(Default)]
pub struct InputState {
    /// Eine Taste wurde über der Zeichenfläche gedrückt und ist noch unten
    pub(crate) pointer_down_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_down_on_canvas: false,
        }
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Pixel-Koordinaten sind relativ zur linken oberen Ecke von `response.rect`.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext { ui, response };
        let mut events = Vec::new();

        self.handle_presses(&ctx, &mut events);
        self.handle_pointer_motion(&ctx, &mut events);
        self.handle_release(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Zeichenflächen-Pixel um.
pub(crate) fn screen_pos_to_canvas(pointer_pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    canvas_pixel(pointer_pos, response.rect.min)
}

/// Ganzzahlige Pixelposition relativ zu `origin`.
///
/// Kontrollpunkte werden im Hit-Test auf ganze Pixel projiziert; der Zeiger
/// wird ebenso auf ganze Pixel abgerundet, damit die strikte Radius-Grenze
/// für beide Seiten gleich liegt.
fn canvas_pixel(pointer_pos: egui::Pos2, origin: egui::Pos2) -> DVec2 {
    let local = pointer_pos - origin;
    DVec2::new(local.x as f64, local.y as f64).floor()
}
