//! Bézier Curve Editor.
//!
//! Interaktiver Editor für Bézier-Kurven beliebigen Grades: Kontrollpunkte
//! eingeben, ziehen, löschen und die Kurve per Bernstein-Form zeichnen.

use bezier_curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

/// Platz für Menü, Toolbar und Status-Bar zusätzlich zur Zeichenfläche.
const WINDOW_CHROME: [f32; 2] = [40.0, 110.0];

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let inner_size = [
            editor_options.canvas_width as f32 + WINDOW_CHROME[0],
            editor_options.canvas_height as f32 + WINDOW_CHROME[1],
        ];

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(inner_size)
                .with_title("Bézier Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Curve Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &mut self.state));
        ui::render_status_bar(ctx, &self.state);

        events.extend(ui::show_delete_dialog(ctx, &self.state.ui));
        events.extend(ui::show_input_error_dialog(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let scene = self.controller.build_render_scene(&self.state);
        events.extend(ui::render_canvas(ctx, &scene, &mut self.input));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
