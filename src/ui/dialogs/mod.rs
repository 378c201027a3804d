//! Modale Dialoge: Lösch-Rückfrage und Eingabefehler.
//!
//! Beide Dialoge blockieren die übrige Oberfläche, bis eine Antwort vorliegt.

mod delete_dialog;
mod input_error_dialog;

pub use delete_dialog::show_delete_dialog;
pub use input_error_dialog::show_input_error_dialog;
