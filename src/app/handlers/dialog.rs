//! Handler für Anwendungs-Steuerung.

use crate::app::AppState;

/// Signalisiert das Beenden der Anwendung.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
