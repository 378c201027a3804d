//! Tastendruck auf der Zeichenfläche.

use super::{screen_pos_to_canvas, CanvasContext, InputState};
use crate::app::{AppIntent, PointerButton};

const BUTTONS: [(egui::PointerButton, PointerButton); 3] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
    (egui::PointerButton::Middle, PointerButton::Middle),
];

impl InputState {
    /// Meldet gedrückte Tasten, sofern der Zeiger über der Zeichenfläche steht.
    ///
    /// Reagiert auf das Drücken selbst, nicht erst auf den Klick (Drücken + Loslassen):
    /// ein Punkt wird sofort gegriffen.
    pub(crate) fn handle_presses(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }

        // press_origin() liefert die exakte Position des Drückens, unabhängig
        // von späteren Bewegungen im selben Frame
        let (press_pos, pressed) = ctx.ui.input(|i| {
            let pressed: Vec<PointerButton> = BUTTONS
                .iter()
                .filter(|(egui_button, _)| i.pointer.button_pressed(*egui_button))
                .map(|&(_, button)| button)
                .collect();
            (i.pointer.press_origin(), pressed)
        });

        let Some(press_pos) = press_pos else {
            return;
        };
        if pressed.is_empty() {
            return;
        }

        let pixel = screen_pos_to_canvas(press_pos, ctx.response);
        self.pointer_down_on_canvas = true;
        for button in pressed {
            events.push(AppIntent::PointerPressed { pixel, button });
        }
    }
}
