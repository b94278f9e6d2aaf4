//! Handler für das Speichern, Laden und Löschen von Konfigurationen.

use crate::app::AppState;

/// Speichert die aktuelle Hotspot-Liste als benannte Konfiguration.
pub fn save_configuration(state: &mut AppState, name: &str) {
    let snapshot = state.hotspots.snapshot();
    let model_id = state.model.id.clone();
    if let Some(config) = state.configs.save(name, snapshot, &model_id) {
        state.ui.status_message = Some(format!("Konfiguration '{}' gespeichert", config.name));
        state.ui.save_name_input.clear();
    }
}

/// Lädt eine gespeicherte Konfiguration: ersetzt die Hotspot-Liste durch
/// eine tiefe Kopie, löscht beide Auswahl-Referenzen und schließt das
/// Overlay. Der gespeicherte Eintrag bleibt unverändert.
pub fn load_configuration(state: &mut AppState, config_id: &str) {
    let Some(config) = state.configs.get(config_id) else {
        log::warn!("Konfiguration {} nicht gefunden", config_id);
        return;
    };
    if config.model_id != state.model.id {
        log::info!(
            "Konfiguration {} gehört zu Modell '{}' (aktuell: '{}')",
            config_id,
            config.model_id,
            state.model.id
        );
    }

    let name = config.name.clone();
    let hotspots = config.hotspots.clone();
    state.hotspots.replace_all(hotspots);
    state.mode.clear_active();
    state.mode.clear_editing();
    state.mode.close_save_load();
    state.ui.status_message = Some(format!("Konfiguration '{}' geladen", name));
    log::info!("Konfiguration '{}' geladen ({} Hotspots)", name, state.hotspots.len());
}

/// Entfernt eine Konfiguration aus der Sammlung (No-op bei unbekannter ID).
pub fn delete_configuration(state: &mut AppState, config_id: &str) {
    state.configs.delete(config_id);
}
