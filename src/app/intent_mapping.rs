//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzen Modus-Gating und Eingabe-Validierung: Intents, die im
//! aktuellen Modus nicht legal sind oder ungültige Eingaben tragen,
//! erzeugen schlicht keine Commands.

use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToggleEditModeRequested => vec![AppCommand::ToggleEditMode],
        AppIntent::OpenSaveLoadRequested => vec![AppCommand::OpenSaveLoad],
        AppIntent::CloseSaveLoadRequested => vec![AppCommand::CloseSaveLoad],

        AppIntent::HotspotMarkerClicked { id } => {
            // Eine Geste, zwei Bedeutungen: der Modus entscheidet.
            match state.mode.mode() {
                InteractionMode::View => vec![AppCommand::SelectHotspotForInfo { id }],
                InteractionMode::Edit => vec![AppCommand::SelectHotspotForEditing { id }],
                // Overlay ist modal: Marker-Klicks darunter verfallen
                InteractionMode::SaveLoad => Vec::new(),
            }
        }
        AppIntent::HotspotSelectedForEdit { id } => {
            if state.mode.is_edit() {
                vec![AppCommand::SelectHotspotForEditing { id }]
            } else {
                Vec::new()
            }
        }
        AppIntent::InfoPopupClosed => vec![AppCommand::ClearInfoSelection],

        AppIntent::AddHotspotRequested => {
            if state.mode.is_edit() {
                vec![AppCommand::AddHotspot]
            } else {
                Vec::new()
            }
        }
        AppIntent::DeleteHotspotRequested { id } => {
            if state.mode.is_edit() {
                vec![AppCommand::DeleteHotspot { id }]
            } else {
                Vec::new()
            }
        }
        AppIntent::UpdateHotspotPosition { id, axis, value } => {
            if !value.is_finite() {
                log::warn!("Nicht-endlicher Positionswert für {} verworfen", id);
                return Vec::new();
            }
            if state.mode.is_edit() {
                vec![AppCommand::SetHotspotAxis { id, axis, value }]
            } else {
                Vec::new()
            }
        }
        AppIntent::UpdateHotspotTitle { id, title } => {
            if state.mode.is_edit() {
                vec![AppCommand::SetHotspotTitle { id, title }]
            } else {
                Vec::new()
            }
        }
        AppIntent::UpdateHotspotDescription { id, description } => {
            if state.mode.is_edit() {
                vec![AppCommand::SetHotspotDescription { id, description }]
            } else {
                Vec::new()
            }
        }

        AppIntent::SurfaceClicked { pointer } => {
            // Platzierung nur bei aktivem Bearbeiten-Modus MIT
            // Bearbeitungsziel — sonst bleibt der Klick folgenlos und
            // die Kamera lässt sich weiter frei bewegen.
            if state.mode.is_edit() && state.mode.editing_hotspot_id.is_some() {
                vec![AppCommand::PlaceEditedHotspot { pointer }]
            } else {
                Vec::new()
            }
        }

        AppIntent::SaveConfigurationRequested { name } => {
            // Leere Namen werden an der Grenze verworfen; die UI
            // deaktiviert den Button zusätzlich.
            if name.trim().is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::SaveConfiguration { name }]
            }
        }
        AppIntent::LoadConfigurationRequested { config_id } => {
            vec![AppCommand::LoadConfiguration { config_id }]
        }
        AppIntent::DeleteConfigurationRequested { config_id } => {
            vec![AppCommand::DeleteConfiguration { config_id }]
        }

        AppIntent::ToggleAutoRotateRequested => vec![AppCommand::ToggleAutoRotate],
        AppIntent::SetRotationSpeedRequested { speed } => {
            if speed.is_finite() {
                vec![AppCommand::SetRotationSpeed { speed }]
            } else {
                Vec::new()
            }
        }

        AppIntent::CameraOrbitRequested { delta } => {
            let sensitivity = state.options.orbit_sensitivity;
            vec![AppCommand::OrbitCamera {
                delta_yaw: -delta.x * sensitivity,
                delta_pitch: delta.y * sensitivity,
            }]
        }
        AppIntent::CameraZoomRequested { scroll_delta } => {
            if scroll_delta == 0.0 {
                return Vec::new();
            }
            let step = state.options.scroll_zoom_step;
            let factor = if scroll_delta > 0.0 { 1.0 / step } else { step };
            vec![AppCommand::ZoomCamera { factor }]
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::ModelSelected { model_id } => {
            if model_id != state.model.id && crate::core::find_model(&model_id).is_some() {
                vec![AppCommand::SwitchModel { model_id }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
