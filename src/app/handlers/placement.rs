//! Handler für die Ray-Cast-Platzierung des Bearbeitungsziels.

use crate::app::AppState;
use glam::Vec2;

/// Setzt die Position des Bearbeitungsziels auf den nächstgelegenen
/// Schnittpunkt des Pointer-Strahls mit den Modell-Flächen.
///
/// Das Mapping garantiert Bearbeiten-Modus + gesetztes Ziel; der Strahl
/// wird in Modell-lokale Koordinaten gedreht, damit Positionen unter
/// akkumulierter Auto-Rotation stabil bleiben. Kein Treffer = No-op.
pub fn place_edited_hotspot(state: &mut AppState, pointer: Vec2) {
    let Some(id) = state.mode.editing_hotspot_id.clone() else {
        return;
    };

    let viewport = Vec2::new(state.view.viewport_size[0], state.view.viewport_size[1]);
    let ray = state.view.camera.screen_to_ray(pointer, viewport);
    let local_ray = ray.rotated_y(-state.view.spin_angle);

    let Some(hit) = state.scene.first_hit(&local_ray) else {
        log::debug!("Platzierungs-Klick ohne Flächen-Treffer ignoriert");
        return;
    };

    if state.hotspots.set_position(&id, hit.point) {
        log::info!(
            "Hotspot {} platziert auf ({:.2}, {:.2}, {:.2})",
            id,
            hit.point.x,
            hit.point.y,
            hit.point.z
        );
    }
}
