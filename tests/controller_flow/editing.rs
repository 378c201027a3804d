use super::{add_points, press, test_state};
use bezier_curve_editor::{AppCommand, AppController, AppIntent, AppState, PointerButton};
use glam::DVec2;

fn draw_curve(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::DrawCurveRequested)
        .expect("DrawCurveRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_add_point_clears_input_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = test_state("add_point");
    state.ui.point_input = " 2 , 3 ".to_string();

    let text = state.ui.point_input.clone();
    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested { text })
        .expect("AddPointRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.points.points(), &[DVec2::new(2.0, 3.0)]);
    assert!(state.ui.point_input.is_empty());
    assert_eq!(state.ui.status_message.as_deref(), Some("P1 = (2, 3)"));
    assert!(state.ui.input_error.is_none());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::AddPoint { .. })
    ));
}

#[test]
fn test_invalid_input_reports_error_without_touching_points() {
    let mut controller = AppController::new();
    let mut state = test_state("invalid_input");
    add_points(&mut controller, &mut state, &["1,1"]);

    for text in ["abc", "2", "1,2,3", "x,1", ""] {
        state.ui.point_input = text.to_string();
        controller
            .handle_intent(
                &mut state,
                AppIntent::AddPointRequested {
                    text: text.to_string(),
                },
            )
            .expect("Ungültige Eingabe ist kein Controller-Fehler");

        assert_eq!(state.point_count(), 1, "Eingabe '{text}' darf nichts hinzufügen");
        assert_eq!(
            state.ui.input_error.as_deref(),
            Some("Expected: X,Y (e.g. 2,3)")
        );
        // Fehlerhafte Eingabe bleibt zur Korrektur stehen
        assert_eq!(state.ui.point_input, text);

        controller
            .handle_intent(&mut state, AppIntent::InputErrorDismissed)
            .expect("InputErrorDismissed sollte ohne Fehler durchlaufen");
        assert!(state.ui.input_error.is_none());
    }
}

#[test]
fn test_drag_moves_point_and_release_ends_drag() {
    let mut controller = AppController::new();
    let mut state = test_state("drag_move");
    add_points(&mut controller, &mut state, &["2,3", "5,5"]);

    // (2,3) liegt bei Pixel (340, 240)
    press(&mut controller, &mut state, 341.0, 239.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), Some(0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pixel: DVec2::new(360.0, 260.0),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");
    assert_eq!(state.points.get(0), Some(DVec2::new(3.0, 2.0)));
    assert_eq!(state.points.get(1), Some(DVec2::new(5.0, 5.0)));

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.selected_index(), None);

    // Weitere Bewegung ohne Selektion verändert nichts
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pixel: DVec2::new(0.0, 0.0),
            },
        )
        .expect("PointerDragged ohne Selektion sollte ohne Fehler durchlaufen");
    assert_eq!(state.points.get(0), Some(DVec2::new(3.0, 2.0)));
}

#[test]
fn test_hit_box_is_strict_and_prefers_lowest_index() {
    let mut controller = AppController::new();
    let mut state = test_state("hit_box");
    add_points(&mut controller, &mut state, &["0,0", "0.25,0"]);

    // Genau 10 px Abstand liegt außerhalb der Hitbox
    press(&mut controller, &mut state, 310.0, 300.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), None);

    // Beide Punkte getroffen (300 und 305 px): der erste gewinnt
    press(&mut controller, &mut state, 304.0, 300.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), Some(0));
}

#[test]
fn test_middle_button_and_empty_area_do_nothing() {
    let mut controller = AppController::new();
    let mut state = test_state("middle_button");
    add_points(&mut controller, &mut state, &["0,0"]);

    press(&mut controller, &mut state, 300.0, 300.0, PointerButton::Middle);
    press(&mut controller, &mut state, 10.0, 10.0, PointerButton::Primary);
    press(&mut controller, &mut state, 10.0, 10.0, PointerButton::Secondary);

    assert_eq!(state.selection.selected_index(), None);
    assert!(state.ui.pending_delete.is_none());
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_clear_removes_all_points_and_hides_curve() {
    let mut controller = AppController::new();
    let mut state = test_state("clear");
    add_points(&mut controller, &mut state, &["0,0", "1,1", "2,0"]);
    controller
        .handle_intent(&mut state, AppIntent::DrawCurveRequested)
        .expect("DrawCurveRequested sollte ohne Fehler durchlaufen");
    assert!(state.view.curve.is_some());

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");

    assert!(state.points.is_empty());
    assert!(state.view.curve.is_none());
    assert_eq!(state.ui.status_message.as_deref(), Some("Canvas cleared"));

    // Nach dem Leeren trifft ein Klick auf den alten Punkt nichts mehr
    press(&mut controller, &mut state, 300.0, 300.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), None);
}

#[test]
fn test_any_mutation_hides_drawn_curve() {
    let mut controller = AppController::new();
    let mut state = test_state("invalidate_curve");
    add_points(&mut controller, &mut state, &["0,0", "1,1"]);

    draw_curve(&mut controller, &mut state);
    add_points(&mut controller, &mut state, &["2,0"]);
    assert!(state.view.curve.is_none(), "Hinzufügen blendet die Kurve aus");

    draw_curve(&mut controller, &mut state);
    press(&mut controller, &mut state, 300.0, 300.0, PointerButton::Primary);
    assert!(state.view.curve.is_some(), "Greifen allein ändert nichts");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pixel: DVec2::new(320.0, 300.0),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");
    assert!(state.view.curve.is_none(), "Verschieben blendet die Kurve aus");
}
