//! Zeigerbewegung bei gedrückter Taste und Loslassen.

use super::{screen_pos_to_canvas, CanvasContext, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Meldet jede Zeigerbewegung, solange eine auf der Zeichenfläche begonnene
    /// Betätigung andauert, auch außerhalb der Fläche.
    pub(crate) fn handle_pointer_motion(&self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !self.pointer_down_on_canvas {
            return;
        }

        let moved_to = ctx.ui.input(|i| {
            if i.pointer.any_down() && i.pointer.delta() != egui::Vec2::ZERO {
                i.pointer.latest_pos()
            } else {
                None
            }
        });

        if let Some(pointer_pos) = moved_to {
            events.push(AppIntent::PointerDragged {
                pixel: screen_pos_to_canvas(pointer_pos, ctx.response),
            });
        }
    }

    /// Beendet die Betätigung beim Loslassen.
    pub(crate) fn handle_release(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !self.pointer_down_on_canvas {
            return;
        }

        if ctx.ui.input(|i| i.pointer.any_released()) {
            self.pointer_down_on_canvas = false;
            events.push(AppIntent::PointerReleased);
        }
    }
}
