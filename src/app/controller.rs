//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ViewerScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Auswahl ===
            AppCommand::ToggleEditMode => handlers::selection::toggle_edit_mode(state),
            AppCommand::OpenSaveLoad => handlers::selection::open_save_load(state),
            AppCommand::CloseSaveLoad => handlers::selection::close_save_load(state),
            AppCommand::SelectHotspotForInfo { id } => {
                handlers::selection::select_for_info(state, id)
            }
            AppCommand::SelectHotspotForEditing { id } => {
                handlers::selection::select_for_editing(state, id)
            }
            AppCommand::ClearInfoSelection => handlers::selection::clear_info(state),

            // === Hotspot-Editing ===
            AppCommand::AddHotspot => handlers::editing::add_hotspot(state),
            AppCommand::DeleteHotspot { id } => handlers::editing::delete_hotspot(state, &id),
            AppCommand::SetHotspotAxis { id, axis, value } => {
                handlers::editing::set_axis(state, &id, axis, value)
            }
            AppCommand::SetHotspotTitle { id, title } => {
                handlers::editing::set_title(state, &id, title)
            }
            AppCommand::SetHotspotDescription { id, description } => {
                handlers::editing::set_description(state, &id, description)
            }
            AppCommand::PlaceEditedHotspot { pointer } => {
                handlers::placement::place_edited_hotspot(state, pointer)
            }

            // === Konfigurationen ===
            AppCommand::SaveConfiguration { name } => {
                handlers::persistence::save_configuration(state, &name)
            }
            AppCommand::LoadConfiguration { config_id } => {
                handlers::persistence::load_configuration(state, &config_id)
            }
            AppCommand::DeleteConfiguration { config_id } => {
                handlers::persistence::delete_configuration(state, &config_id)
            }

            // === Kamera & Ansicht ===
            AppCommand::ToggleAutoRotate => handlers::view::toggle_auto_rotate(state),
            AppCommand::SetRotationSpeed { speed } => {
                handlers::view::set_rotation_speed(state, speed)
            }
            AppCommand::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view::orbit_camera(state, delta_yaw, delta_pitch),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom_camera(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SwitchModel { model_id } => handlers::view::switch_model(state, &model_id),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Viewer-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> ViewerScene {
        render_scene::build(state)
    }
}
