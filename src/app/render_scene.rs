//! Builder für Viewer-Szenen aus dem AppState.
//!
//! Reine Ableitung ohne eigenen Zustand: gleiche Eingaben ergeben
//! dieselbe Szene, damit die Darstellung nach jeder Mutation
//! deterministisch neu gezeichnet werden kann.

use crate::app::AppState;
use crate::shared::{HotspotMarker, ViewerScene};

/// Baut eine ViewerScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> ViewerScene {
    let markers = state
        .hotspots
        .iter()
        .map(|hotspot| HotspotMarker {
            hotspot: hotspot.clone(),
            is_active: state.mode.active_hotspot_id.as_deref() == Some(hotspot.id.as_str()),
            is_editing: state.mode.editing_hotspot_id.as_deref() == Some(hotspot.id.as_str()),
        })
        .collect();

    ViewerScene {
        markers,
        editing_hotspot: state.editing_hotspot().cloned(),
        info_hotspot: if state.mode.is_view() {
            state.active_hotspot().cloned()
        } else {
            None
        },
        edit_mode: state.mode.is_edit(),
        save_overlay_visible: state.mode.is_save_load_open(),
        configs: state.configs.iter().cloned().collect(),
        camera: state.view.camera.clone(),
        spin_angle: state.view.spin_angle,
        auto_rotate: state.view.auto_rotate,
        rotation_speed: state.view.rotation_speed,
        viewport_size: state.view.viewport_size,
        surfaces: state.scene.clone(),
        model: state.model.clone(),
        options: state.options.clone(),
    }
}
