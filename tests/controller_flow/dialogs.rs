use super::{add_points, press, test_state};
use bezier_curve_editor::{
    AppCommand, AppController, AppIntent, AppState, DeleteRequest, PointerButton,
};
use glam::DVec2;

fn answer(controller: &mut AppController, state: &mut AppState, confirmed: bool) {
    controller
        .handle_intent(state, AppIntent::DeleteConfirmationAnswered { confirmed })
        .expect("DeleteConfirmationAnswered sollte ohne Fehler durchlaufen");
}

#[test]
fn test_secondary_press_asks_before_deleting() {
    let mut controller = AppController::new();
    let mut state = test_state("delete_confirmed");
    add_points(&mut controller, &mut state, &["2,3", "5,5", "-1,0"]);

    // (5,5) liegt bei Pixel (400, 200)
    press(&mut controller, &mut state, 402.0, 198.0, PointerButton::Secondary);
    assert_eq!(
        state.ui.pending_delete,
        Some(DeleteRequest {
            index: 1,
            point: DVec2::new(5.0, 5.0),
        })
    );
    assert_eq!(state.point_count(), 3, "Vor der Antwort wird nichts gelöscht");

    answer(&mut controller, &mut state, true);

    assert_eq!(
        state.points.points(),
        &[DVec2::new(2.0, 3.0), DVec2::new(-1.0, 0.0)]
    );
    assert!(state.ui.pending_delete.is_none());
    assert_eq!(state.ui.status_message.as_deref(), Some("P2 removed"));
    assert!(state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::RemovePoint { index: 1 })));
}

#[test]
fn test_declined_delete_keeps_points() {
    let mut controller = AppController::new();
    let mut state = test_state("delete_declined");
    add_points(&mut controller, &mut state, &["2,3", "5,5"]);

    press(&mut controller, &mut state, 340.0, 240.0, PointerButton::Secondary);
    assert!(state.ui.pending_delete.is_some());

    answer(&mut controller, &mut state, false);

    assert_eq!(state.point_count(), 2);
    assert!(state.ui.pending_delete.is_none());
}

#[test]
fn test_open_dialog_blocks_canvas_presses() {
    let mut controller = AppController::new();
    let mut state = test_state("modal_blocks");
    add_points(&mut controller, &mut state, &["2,3", "5,5"]);

    press(&mut controller, &mut state, 340.0, 240.0, PointerButton::Secondary);
    press(&mut controller, &mut state, 400.0, 200.0, PointerButton::Primary);
    press(&mut controller, &mut state, 400.0, 200.0, PointerButton::Secondary);

    assert_eq!(state.selection.selected_index(), None);
    assert_eq!(state.ui.pending_delete.map(|r| r.index), Some(0));

    answer(&mut controller, &mut state, false);

    // Eingabefehler sperren die Zeichenfläche ebenso
    add_points(&mut controller, &mut state, &["nope"]);
    press(&mut controller, &mut state, 400.0, 200.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), None);

    controller
        .handle_intent(&mut state, AppIntent::InputErrorDismissed)
        .expect("InputErrorDismissed sollte ohne Fehler durchlaufen");
    press(&mut controller, &mut state, 400.0, 200.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), Some(1));
}

#[test]
fn test_stale_confirmation_does_not_remove_other_point() {
    let mut controller = AppController::new();
    let mut state = test_state("delete_stale");
    add_points(&mut controller, &mut state, &["2,3", "5,5"]);

    press(&mut controller, &mut state, 340.0, 240.0, PointerButton::Secondary);
    assert_eq!(state.ui.pending_delete.map(|r| r.index), Some(0));

    // Liste ändert sich, während die Rückfrage offen ist
    controller
        .handle_command(&mut state, AppCommand::RemovePoint { index: 0 })
        .expect("RemovePoint sollte ohne Fehler durchlaufen");

    answer(&mut controller, &mut state, true);

    assert_eq!(state.points.points(), &[DVec2::new(5.0, 5.0)]);
    assert!(state.ui.pending_delete.is_none());
}

#[test]
fn test_answer_without_open_dialog_is_ignored() {
    let mut controller = AppController::new();
    let mut state = test_state("delete_no_dialog");
    add_points(&mut controller, &mut state, &["2,3"]);
    let logged = state.command_log.len();

    answer(&mut controller, &mut state, true);

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_remove_out_of_range_is_reported_as_error() {
    let mut controller = AppController::new();
    let mut state = test_state("remove_out_of_range");
    add_points(&mut controller, &mut state, &["2,3"]);

    let err = controller
        .handle_command(&mut state, AppCommand::RemovePoint { index: 4 })
        .expect_err("Index 4 existiert nicht");

    assert!(format!("{err:#}").contains("P5"));
    assert_eq!(state.point_count(), 1);
}
