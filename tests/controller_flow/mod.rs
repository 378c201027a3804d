use bezier_curve_editor::{AppController, AppIntent, AppState, PointerButton};
use glam::DVec2;
use std::path::PathBuf;

mod dialogs;
mod editing;
mod options;

/// AppState mit eigener Optionen-Datei im Temp-Verzeichnis.
pub fn test_state(name: &str) -> AppState {
    let mut state = AppState::new();
    state.options_path = temp_options_path(name);
    state
}

pub fn temp_options_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "bezier_curve_editor_{}_{}.toml",
        name,
        std::process::id()
    ))
}

/// Fügt Punkte über die Texteingabe hinzu.
pub fn add_points(controller: &mut AppController, state: &mut AppState, inputs: &[&str]) {
    for text in inputs {
        controller
            .handle_intent(
                state,
                AppIntent::AddPointRequested {
                    text: text.to_string(),
                },
            )
            .expect("AddPointRequested sollte ohne Fehler durchlaufen");
    }
}

pub fn press(
    controller: &mut AppController,
    state: &mut AppState,
    x: f64,
    y: f64,
    button: PointerButton,
) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pixel: DVec2::new(x, y),
                button,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}
