use glam::{Vec2, Vec3};
use hotspot_model_viewer::persistence::CONFIG_STORE_KEY;
use hotspot_model_viewer::render::{project_point, scene_view_proj};
use hotspot_model_viewer::{
    AppCommand, AppController, AppIntent, AppState, Axis, ConfigStore, KeyValueStore,
    MemoryStorage, SceneModel, SceneSurface,
};

const VIEWPORT: [f32; 2] = [1280.0, 720.0];

fn make_state() -> (AppController, AppState) {
    let mut state = AppState::new();
    state.view.viewport_size = VIEWPORT;
    (AppController::new(), state)
}

fn enter_edit_mode(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::ToggleEditModeRequested)
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");
    assert!(state.mode.is_edit());
}

fn add_hotspot(controller: &mut AppController, state: &mut AppState) -> String {
    controller
        .handle_intent(state, AppIntent::AddHotspotRequested)
        .expect("AddHotspotRequested sollte funktionieren");
    state
        .mode
        .editing_hotspot_id
        .clone()
        .expect("Neuer Hotspot sollte Bearbeitungsziel sein")
}

// ═══════════════════════════════════════════════════════════════════
// Hotspot-Store: IDs, Nummerierung, Feld-Editing
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_added_hotspots_have_pairwise_distinct_ids() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);

    let mut ids = Vec::new();
    for _ in 0..10 {
        ids.push(add_hotspot(&mut controller, &mut state));
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_delete_is_idempotent() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    let id = add_hotspot(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::DeleteHotspotRequested { id: id.clone() })
        .expect("Erstes Löschen sollte funktionieren");
    assert!(!state.hotspots.contains(&id));
    let count = state.hotspot_count();

    // Zweites Löschen derselben ID: gutartiger No-op
    controller
        .handle_intent(&mut state, AppIntent::DeleteHotspotRequested { id })
        .expect("Zweites Löschen sollte gutartig sein");
    assert_eq!(state.hotspot_count(), count);
}

#[test]
fn test_deleting_editing_target_clears_reference() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    let id = add_hotspot(&mut controller, &mut state);
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some(id.as_str()));

    controller
        .handle_intent(&mut state, AppIntent::DeleteHotspotRequested { id })
        .unwrap();

    assert!(state.mode.editing_hotspot_id.is_none());
}

#[test]
fn test_axis_update_round_trips_exactly() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);

    for (axis, value) in [(Axis::X, 1.5_f32), (Axis::Y, -0.125), (Axis::Z, 4.75)] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::UpdateHotspotPosition {
                    id: "demo-1".into(),
                    axis,
                    value,
                },
            )
            .unwrap();
        let position = state.hotspots.get("demo-1").unwrap().position;
        assert_eq!(position[axis.index()], value);
    }
}

#[test]
fn test_count_based_title_numbering_after_delete() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);

    // Store leeren (Demo-Hotspot entfernen)
    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteHotspotRequested { id: "demo-1".into() },
        )
        .unwrap();
    assert_eq!(state.hotspot_count(), 0);

    let first = add_hotspot(&mut controller, &mut state);
    let second = add_hotspot(&mut controller, &mut state);
    assert_eq!(state.hotspots.get(&first).unwrap().title, "Hotspot 1");
    assert_eq!(state.hotspots.get(&second).unwrap().title, "Hotspot 2");

    // Anzahlbasierte Nummerierung: nach Löschen des ersten trägt der
    // nächste wieder "Hotspot 2" — mit frischer ID
    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteHotspotRequested { id: first.clone() },
        )
        .unwrap();
    let third = add_hotspot(&mut controller, &mut state);
    assert_eq!(state.hotspots.get(&third).unwrap().title, "Hotspot 2");
    assert_ne!(third, first);
    assert_ne!(third, second);
}

// ═══════════════════════════════════════════════════════════════════
// Mode Controller: Klick-Dispatch, Moduswechsel, Overlay
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_marker_click_meaning_forks_on_mode() {
    let (mut controller, mut state) = make_state();

    // View-Modus: Klick setzt active (Info-Popup)
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert_eq!(state.mode.active_hotspot_id.as_deref(), Some("demo-1"));
    assert!(state.mode.editing_hotspot_id.is_none());

    // Edit-Modus: derselbe Klick setzt das Bearbeitungsziel
    enter_edit_mode(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some("demo-1"));
    assert!(state.mode.active_hotspot_id.is_none());
}

#[test]
fn test_mode_switches_clear_the_respective_selection() {
    let (mut controller, mut state) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert!(state.mode.active_hotspot_id.is_some());

    // View → Edit löscht active
    enter_edit_mode(&mut controller, &mut state);
    assert!(state.mode.active_hotspot_id.is_none());

    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert!(state.mode.editing_hotspot_id.is_some());

    // Edit → View löscht editing
    controller
        .handle_intent(&mut state, AppIntent::ToggleEditModeRequested)
        .unwrap();
    assert!(state.mode.is_view());
    assert!(state.mode.editing_hotspot_id.is_none());
}

#[test]
fn test_marker_click_replaces_previous_selection() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    let second = add_hotspot(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some("demo-1"));

    // Klick auf anderen Marker ersetzt die Auswahl (keine Akkumulation)
    controller
        .handle_intent(&mut state, AppIntent::HotspotMarkerClicked { id: second.clone() })
        .unwrap();
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some(second.as_str()));
}

#[test]
fn test_save_load_overlay_preserves_state_beneath() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    assert!(state.mode.is_save_load_open());
    // Auswahl darunter bleibt erhalten
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some("demo-1"));

    controller
        .handle_intent(&mut state, AppIntent::CloseSaveLoadRequested)
        .unwrap();
    assert!(state.mode.is_edit());
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some("demo-1"));
}

#[test]
fn test_info_popup_close_clears_active_selection() {
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotMarkerClicked { id: "demo-1".into() },
        )
        .unwrap();
    assert!(state.mode.active_hotspot_id.is_some());

    controller
        .handle_intent(&mut state, AppIntent::InfoPopupClosed)
        .unwrap();
    assert!(state.mode.active_hotspot_id.is_none());
}

// ═══════════════════════════════════════════════════════════════════
// Placement Resolver: Gating und Ray-Cast-Szenario
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_surface_click_without_editing_target_changes_nothing() {
    let (mut controller, mut state) = make_state();
    let before = state.hotspots.snapshot();

    // View-Modus
    controller
        .handle_intent(
            &mut state,
            AppIntent::SurfaceClicked {
                pointer: Vec2::new(640.0, 360.0),
            },
        )
        .unwrap();
    assert_eq!(state.hotspots.snapshot(), before);

    // Edit-Modus ohne Bearbeitungsziel
    enter_edit_mode(&mut controller, &mut state);
    state.mode.clear_editing();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SurfaceClicked {
                pointer: Vec2::new(640.0, 360.0),
            },
        )
        .unwrap();
    assert_eq!(state.hotspots.snapshot(), before);
    // Kein Platzierungs-Command ausgeführt
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::PlaceEditedHotspot { .. })));
}

#[test]
fn test_surface_click_places_editing_target_on_resolved_point() {
    let (mut controller, mut state) = make_state();

    // Szene mit genau einer Fläche, die den Zielpunkt enthält:
    // Scheibe um [1.5, 0.9, -0.3], Normale Richtung Kamera
    let target = Vec3::new(1.5, 0.9, -0.3);
    let normal = (state.view.camera.position() - target).normalize();
    state.scene = SceneModel::new(vec![SceneSurface::Disc {
        center: target,
        normal,
        radius: 3.0,
    }]);
    state.view.spin_angle = 0.0;

    controller
        .handle_intent(&mut state, AppIntent::ToggleEditModeRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotSelectedForEdit { id: "demo-1".into() },
        )
        .unwrap();
    assert_eq!(state.mode.editing_hotspot_id.as_deref(), Some("demo-1"));

    // Pointer-Position durch Rückprojektion des Zielpunkts bestimmen
    let scene = controller.build_render_scene(&state);
    let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(VIEWPORT[0], VIEWPORT[1]));
    let pointer = project_point(scene_view_proj(&scene, rect), rect, target)
        .expect("Zielpunkt sollte im Viewport liegen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SurfaceClicked {
                pointer: Vec2::new(pointer.x, pointer.y),
            },
        )
        .unwrap();

    let position = state.hotspots.get("demo-1").unwrap().position;
    assert!((position - target).length() < 1e-2, "Position: {position:?}");
}

#[test]
fn test_miss_leaves_position_unchanged() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::HotspotSelectedForEdit { id: "demo-1".into() },
        )
        .unwrap();

    let before = state.hotspots.get("demo-1").unwrap().position;
    // Klick in die obere Ecke: Strahl verfehlt alle Flächen
    controller
        .handle_intent(
            &mut state,
            AppIntent::SurfaceClicked {
                pointer: Vec2::new(2.0, 2.0),
            },
        )
        .unwrap();
    assert_eq!(state.hotspots.get("demo-1").unwrap().position, before);
}

// ═══════════════════════════════════════════════════════════════════
// Configuration Persistence: Speichern, Laden, Löschen
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_blank_save_name_leaves_collection_unchanged() {
    let (mut controller, mut state) = make_state();

    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    for name in ["", "   "] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SaveConfigurationRequested { name: name.into() },
            )
            .unwrap();
    }
    assert_eq!(state.config_count(), 0);
}

#[test]
fn test_save_then_load_restores_exact_snapshot() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateHotspotPosition {
                id: "demo-1".into(),
                axis: Axis::X,
                value: 2.5,
            },
        )
        .unwrap();
    let snapshot = state.hotspots.snapshot();

    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveConfigurationRequested {
                name: "Layout A".into(),
            },
        )
        .unwrap();
    let config_id = state.configs.iter().next().unwrap().id.clone();
    controller
        .handle_intent(&mut state, AppIntent::CloseSaveLoadRequested)
        .unwrap();

    // Unabhängige Mutationen nach dem Speichern
    let extra = add_hotspot(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateHotspotTitle {
                id: "demo-1".into(),
                title: "geändert".into(),
            },
        )
        .unwrap();
    assert_ne!(state.hotspots.snapshot(), snapshot);

    // Laden stellt exakt den Snapshot wieder her
    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LoadConfigurationRequested {
                config_id: config_id.clone(),
            },
        )
        .unwrap();

    assert_eq!(state.hotspots.snapshot(), snapshot);
    assert!(!state.hotspots.contains(&extra));
    // Laden löscht Auswahl und schließt das Overlay
    assert!(state.mode.editing_hotspot_id.is_none());
    assert!(state.mode.active_hotspot_id.is_none());
    assert!(!state.mode.is_save_load_open());
    // Der gespeicherte Eintrag bleibt unverändert erhalten
    assert_eq!(state.configs.get(&config_id).unwrap().hotspots, snapshot);
}

#[test]
fn test_duplicate_names_produce_distinct_entries() {
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SaveConfigurationRequested { name: "A".into() },
            )
            .unwrap();
    }

    assert_eq!(state.config_count(), 2);
    let configs: Vec<_> = state.configs.iter().collect();
    assert_eq!(configs[0].name, "A");
    assert_eq!(configs[1].name, "A");
    assert_ne!(configs[0].id, configs[1].id);
    assert!(configs[0].timestamp <= configs[1].timestamp);
}

#[test]
fn test_delete_configuration_is_benign_for_unknown_id() {
    let (mut controller, mut state) = make_state();
    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveConfigurationRequested { name: "A".into() },
        )
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteConfigurationRequested {
                config_id: "config-999".into(),
            },
        )
        .unwrap();
    assert_eq!(state.config_count(), 1);

    let real_id = state.configs.iter().next().unwrap().id.clone();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteConfigurationRequested { config_id: real_id },
        )
        .unwrap();
    assert_eq!(state.config_count(), 0);
}

#[test]
fn test_collection_is_reserialized_to_durable_storage() {
    let storage = MemoryStorage::new();
    let mut state = AppState::with_config_store(
        ConfigStore::load(Box::new(storage.clone())).expect("leerer Speicher lädt fehlerfrei"),
    );
    state.view.viewport_size = VIEWPORT;
    let mut controller = AppController::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveConfigurationRequested {
                name: "Layout A".into(),
            },
        )
        .unwrap();

    let raw = storage
        .read(CONFIG_STORE_KEY)
        .unwrap()
        .expect("Sammlung sollte persistiert sein");
    assert!(raw.contains("\"Layout A\""));
    assert!(raw.contains("\"modelId\""));

    // Löschen serialisiert die Rest-Sammlung neu
    let id = state.configs.iter().next().unwrap().id.clone();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteConfigurationRequested { config_id: id },
        )
        .unwrap();
    let raw = storage.read(CONFIG_STORE_KEY).unwrap().unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn test_write_failure_does_not_disturb_in_memory_state() {
    /// Speicher, dessen Schreibpfad immer fehlschlägt.
    struct ReadOnlyStorage;
    impl KeyValueStore for ReadOnlyStorage {
        fn read(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }
        fn write(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("Speicher nicht beschreibbar")
        }
    }

    let mut state = AppState::with_config_store(
        ConfigStore::load(Box::new(ReadOnlyStorage)).expect("leerer Speicher lädt fehlerfrei"),
    );
    state.view.viewport_size = VIEWPORT;
    let mut controller = AppController::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenSaveLoadRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveConfigurationRequested { name: "A".into() },
        )
        .expect("Schreibfehler darf nicht propagieren");

    // In-Memory-Bestand bleibt maßgeblich
    assert_eq!(state.config_count(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Modell-Wechsel und Command-Log
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_model_switch_resets_hotspots_and_selection() {
    let (mut controller, mut state) = make_state();
    enter_edit_mode(&mut controller, &mut state);
    let extra = add_hotspot(&mut controller, &mut state);
    assert_eq!(state.hotspot_count(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModelSelected {
                model_id: "demo".into(),
            },
        )
        .unwrap();

    assert_eq!(state.model.id, "demo");
    assert_eq!(state.hotspot_count(), 1);
    assert!(state.hotspots.contains("demo-1"));
    assert!(!state.hotspots.contains(&extra));
    assert!(state.mode.editing_hotspot_id.is_none());
    // Konfigurationen überleben den Modell-Wechsel
    assert_eq!(state.config_count(), 0);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = make_state();
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_gated_intents_log_no_commands() {
    let (mut controller, mut state) = make_state();

    // Add im View-Modus wird vom Mapping verworfen
    controller
        .handle_intent(&mut state, AppIntent::AddHotspotRequested)
        .unwrap();
    assert!(state.command_log.is_empty());
    assert_eq!(state.hotspot_count(), 1);
}
