//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod selection;
mod view;

pub use app_state::AppState;
pub use dialogs::{point_label, DeleteRequest, UiState};
pub use selection::SelectionState;
pub use view::ViewState;
