//! Handler für das Anlegen, Löschen und Editieren von Hotspots.

use crate::app::AppState;
use crate::core::Axis;

/// Legt einen neuen Hotspot an und macht ihn zum Bearbeitungsziel.
pub fn add_hotspot(state: &mut AppState) {
    let id = state.hotspots.add();
    state.mode.select_for_edit(id);
}

/// Löscht einen Hotspot und räumt hängende Auswahl-Referenzen auf.
/// Unbekannte IDs sind gutartig (No-op).
pub fn delete_hotspot(state: &mut AppState, id: &str) {
    if state.hotspots.remove(id) {
        state.mode.clear_references_to(id);
    }
}

/// Setzt eine einzelne Positionskomponente.
pub fn set_axis(state: &mut AppState, id: &str, axis: Axis, value: f32) {
    state.hotspots.set_axis(id, axis, value);
}

/// Setzt den Titel unverändert.
pub fn set_title(state: &mut AppState, id: &str, title: String) {
    state.hotspots.set_title(id, title);
}

/// Setzt die Beschreibung unverändert.
pub fn set_description(state: &mut AppState, id: &str, description: String) {
    state.hotspots.set_description(id, description);
}
