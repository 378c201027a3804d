use super::{add_points, press, test_state};
use bezier_curve_editor::{AppController, AppIntent, EditorOptions, PointerButton};
use glam::DVec2;

#[test]
fn test_options_dialog_open_close() {
    let mut controller = AppController::new();
    let mut state = test_state("options_dialog");

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_changed_scale_is_applied_persisted_and_hides_curve() {
    let mut controller = AppController::new();
    let mut state = test_state("options_scale");
    let path = state.options_path.clone();
    add_points(&mut controller, &mut state, &["2,3", "5,5"]);
    controller
        .handle_intent(&mut state, AppIntent::DrawCurveRequested)
        .expect("DrawCurveRequested sollte ohne Fehler durchlaufen");

    let mut options = state.options.clone();
    options.scale = 40.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.options.scale, 40.0);
    assert!(state.view.curve.is_none());
    assert_eq!(EditorOptions::load_from_file(&path), state.options);

    // Hit-Test folgt der neuen Abbildung: (2,3) liegt jetzt bei Pixel (380, 180)
    press(&mut controller, &mut state, 380.0, 180.0, PointerButton::Primary);
    assert_eq!(state.selection.selected_index(), Some(0));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_color_change_keeps_curve() {
    let mut controller = AppController::new();
    let mut state = test_state("options_color");
    let path = state.options_path.clone();
    add_points(&mut controller, &mut state, &["0,0", "1,1"]);
    controller
        .handle_intent(&mut state, AppIntent::DrawCurveRequested)
        .expect("DrawCurveRequested sollte ohne Fehler durchlaufen");

    let mut options = state.options.clone();
    options.curve_color = [0.0, 0.5, 0.0, 1.0];
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert!(state.view.curve.is_some());
    assert_eq!(state.options.curve_color, [0.0, 0.5, 0.0, 1.0]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_invalid_options_are_sanitized_and_reset_restores_defaults() {
    let mut controller = AppController::new();
    let mut state = test_state("options_reset");
    let path = state.options_path.clone();

    let mut options = state.options.clone();
    options.scale = 0.0;
    options.hit_radius_px = 4.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.options.scale, EditorOptions::default().scale);
    assert_eq!(state.options.hit_radius_px, 4.0);
    assert_eq!(state.mapper().to_pixel(DVec2::ZERO), DVec2::new(300.0, 300.0));

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("ResetOptionsRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.options, EditorOptions::default());

    let _ = std::fs::remove_file(&path);
}
