//! Handler für Kamera, Auto-Rotation und Modell-Wechsel.

use crate::app::AppState;
use crate::core::{initial_hotspots, scene_for, HotspotList, OrbitCamera};
use crate::shared::options;

/// Pausiert die Auto-Rotation oder setzt sie fort.
pub fn toggle_auto_rotate(state: &mut AppState) {
    state.view.auto_rotate = !state.view.auto_rotate;
    log::info!(
        "Auto-Rotation {}",
        if state.view.auto_rotate {
            "fortgesetzt"
        } else {
            "pausiert"
        }
    );
}

/// Setzt die Drehgeschwindigkeit (begrenzt auf den Regler-Bereich).
pub fn set_rotation_speed(state: &mut AppState, speed: f32) {
    state.view.rotation_speed = speed.clamp(0.0, options::ROTATION_SPEED_MAX);
}

/// Dreht die Kamera um das Ziel.
pub fn orbit_camera(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    state.view.camera.orbit(delta_yaw, delta_pitch);
}

/// Ändert den Kamera-Abstand.
pub fn zoom_camera(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by(factor);
}

/// Setzt die Kamera auf die Standard-Ansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = OrbitCamera::new();
}

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Wechselt das angezeigte Modell.
///
/// Entspricht einem Neuaufbau der Ansicht: Hotspots werden auf den
/// Anfangsbestand zurückgesetzt, Auswahl, Kamera und Drehwinkel ebenso.
pub fn switch_model(state: &mut AppState, model_id: &str) {
    let Some(model) = crate::core::find_model(model_id) else {
        log::warn!("Unbekanntes Modell {} ignoriert", model_id);
        return;
    };

    log::info!("Modell gewechselt: {} → {}", state.model.id, model.id);
    state.scene = scene_for(&model.id);
    state.model = model;
    state.hotspots = HotspotList::from_hotspots(initial_hotspots());
    state.mode.clear_active();
    state.mode.clear_editing();
    state.view.camera = OrbitCamera::new();
    state.view.spin_angle = 0.0;
}
