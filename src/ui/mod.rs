//! UI-Komponenten: Menü, Toolbar, Zeichenfläche, Status-Bar, Dialoge.

mod canvas;
pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Funktionen lesen den AppState und liefern `AppIntent`s. Einzige direkte
/// Schreibstelle ist der Text-Puffer der Punkt-Eingabe.
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::render_canvas;
pub use dialogs::{show_delete_dialog, show_input_error_dialog};
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
