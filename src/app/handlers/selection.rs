//! Handler für Modus-Wechsel und Hotspot-Auswahl.

use crate::app::AppState;

/// Wechselt zwischen View- und Bearbeiten-Modus.
pub fn toggle_edit_mode(state: &mut AppState) {
    state.mode.toggle_edit_mode();
    log::info!("Interaktionsmodus: {:?}", state.mode.mode());
}

/// Öffnet das Speichern/Laden-Overlay.
pub fn open_save_load(state: &mut AppState) {
    state.mode.open_save_load();
}

/// Schließt das Overlay und stellt den vorherigen Modus wieder her.
pub fn close_save_load(state: &mut AppState) {
    state.mode.close_save_load();
    state.ui.save_name_input.clear();
}

/// Wählt einen Hotspot für das Info-Popup aus (View-Modus).
///
/// Unbekannte IDs sind gutartig: ein Klick kann ein Löschen überholen.
pub fn select_for_info(state: &mut AppState, id: String) {
    if !state.hotspots.contains(&id) {
        log::debug!("Info-Auswahl für unbekannten Hotspot {} ignoriert", id);
        return;
    }
    state.mode.select_for_view(id);
}

/// Wählt einen Hotspot als Bearbeitungsziel aus (Edit-Modus).
pub fn select_for_editing(state: &mut AppState, id: String) {
    if !state.hotspots.contains(&id) {
        log::debug!("Bearbeitungs-Auswahl für unbekannten Hotspot {} ignoriert", id);
        return;
    }
    state.mode.select_for_edit(id);
}

/// Löscht die aktive Info-Auswahl (Popup geschlossen).
pub fn clear_info(state: &mut AppState) {
    state.mode.clear_active();
}
