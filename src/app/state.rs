//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{
    initial_hotspots, scene_for, HotspotList, ModelConfig, OrbitCamera, SceneModel,
    DEFAULT_MODEL_ID,
};
use crate::persistence::ConfigStore;
use crate::shared::{options, EditorOptions};

/// Interaktionsmodus: genau einer ist aktiv.
///
/// `SaveLoad` ist ein Overlay — der darunterliegende Modus wird beim Öffnen
/// gemerkt und beim Schließen wiederhergestellt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Betrachten: Marker-Klick öffnet das Info-Popup
    #[default]
    View,
    /// Bearbeiten: Marker-Klick wählt das Bearbeitungsziel
    Edit,
    /// Speichern/Laden-Overlay offen
    SaveLoad,
}

/// Modus- und Auswahl-Zustand (der Mode Controller des Viewers).
///
/// Invarianten: `active_hotspot_id` ist nur im View-Modus gesetzt,
/// `editing_hotspot_id` nur im Edit-Modus, nie beide gleichzeitig.
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    /// Aktiver Modus
    mode: InteractionMode,
    /// Modus unter dem Save/Load-Overlay (für Restore beim Schließen)
    mode_beneath_overlay: InteractionMode,
    /// Im View-Modus angeklickter Hotspot (Info-Popup)
    pub active_hotspot_id: Option<String>,
    /// Im Edit-Modus ausgewähltes Bearbeitungsziel
    pub editing_hotspot_id: Option<String>,
}

impl ModeState {
    /// Erstellt den Startzustand (View-Modus, nichts ausgewählt).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Gibt `true` zurück, wenn der View-Modus aktiv ist.
    pub fn is_view(&self) -> bool {
        self.mode == InteractionMode::View
    }

    /// Gibt `true` zurück, wenn der Bearbeiten-Modus aktiv ist.
    pub fn is_edit(&self) -> bool {
        self.mode == InteractionMode::Edit
    }

    /// Gibt `true` zurück, wenn das Speichern/Laden-Overlay offen ist.
    pub fn is_save_load_open(&self) -> bool {
        self.mode == InteractionMode::SaveLoad
    }

    /// Gibt `true` zurück, wenn der Bearbeiten-Modus aktiv ist oder unter
    /// dem Overlay liegt (pausiert u.a. die Auto-Rotation).
    pub fn is_edit_beneath(&self) -> bool {
        self.is_edit()
            || (self.is_save_load_open() && self.mode_beneath_overlay == InteractionMode::Edit)
    }

    /// Wechselt zwischen View- und Edit-Modus.
    ///
    /// View → Edit löscht die aktive Auswahl, Edit → View das
    /// Bearbeitungsziel. Bei offenem Overlay ein gutartiger No-op.
    pub fn toggle_edit_mode(&mut self) {
        match self.mode {
            InteractionMode::View => {
                self.mode = InteractionMode::Edit;
                self.active_hotspot_id = None;
            }
            InteractionMode::Edit => {
                self.mode = InteractionMode::View;
                self.editing_hotspot_id = None;
            }
            InteractionMode::SaveLoad => {
                log::warn!("Modus-Wechsel bei offenem Overlay ignoriert");
            }
        }
    }

    /// Öffnet das Speichern/Laden-Overlay über dem aktuellen Modus.
    /// Auswahl-Zustand darunter bleibt erhalten.
    pub fn open_save_load(&mut self) {
        if self.mode != InteractionMode::SaveLoad {
            self.mode_beneath_overlay = self.mode;
            self.mode = InteractionMode::SaveLoad;
        }
    }

    /// Schließt das Overlay und stellt den vorherigen Modus wieder her.
    pub fn close_save_load(&mut self) {
        if self.mode == InteractionMode::SaveLoad {
            self.mode = self.mode_beneath_overlay;
        }
    }

    /// Setzt die aktive Auswahl (nur im View-Modus; Einzelauswahl).
    pub fn select_for_view(&mut self, id: String) {
        if self.mode != InteractionMode::View {
            return;
        }
        self.active_hotspot_id = Some(id);
        self.editing_hotspot_id = None;
    }

    /// Setzt das Bearbeitungsziel (nur im Edit-Modus; ersetzt vorherige Wahl).
    pub fn select_for_edit(&mut self, id: String) {
        if self.mode != InteractionMode::Edit {
            return;
        }
        self.editing_hotspot_id = Some(id);
        self.active_hotspot_id = None;
    }

    /// Löscht die aktive Auswahl (Info-Popup geschlossen).
    pub fn clear_active(&mut self) {
        self.active_hotspot_id = None;
    }

    /// Löscht das Bearbeitungsziel (explizite Abwahl).
    pub fn clear_editing(&mut self) {
        self.editing_hotspot_id = None;
    }

    /// Räumt hängende Referenzen auf einen gelöschten Hotspot auf.
    pub fn clear_references_to(&mut self, id: &str) {
        if self.active_hotspot_id.as_deref() == Some(id) {
            self.active_hotspot_id = None;
        }
        if self.editing_hotspot_id.as_deref() == Some(id) {
            self.editing_hotspot_id = None;
        }
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Orbit-Kamera der 3D-Ansicht
    pub camera: OrbitCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Ob die Auto-Rotation läuft
    pub auto_rotate: bool,
    /// Drehgeschwindigkeit (Radiant pro Frame)
    pub rotation_speed: f32,
    /// Akkumulierter Drehwinkel (Radiant)
    pub spin_angle: f32,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            viewport_size: [0.0, 0.0],
            auto_rotate: true,
            rotation_speed: options::ROTATION_SPEED_DEFAULT,
            spin_angle: 0.0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand (Eingabe-Puffer, Statusmeldung).
#[derive(Default)]
pub struct UiState {
    /// Namens-Eingabefeld im Speichern/Laden-Overlay
    pub save_name_input: String,
    /// Temporäre Statusnachricht (z.B. nach Speichern/Laden)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Aktuell angezeigtes Modell
    pub model: ModelConfig,
    /// Schnittflächen des aktuellen Modells
    pub scene: SceneModel,
    /// Hotspot-Liste des aktuellen Modells
    pub hotspots: HotspotList,
    /// Modus- und Auswahl-Zustand
    pub mode: ModeState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Gespeicherte Konfigurationen
    pub configs: ConfigStore,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Empfindlichkeiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit In-Memory-Konfigurationsspeicher.
    pub fn new() -> Self {
        Self::with_config_store(ConfigStore::in_memory())
    }

    /// Erstellt einen App-State über einem vorbereiteten Konfigurationsspeicher
    /// (Kompositionswurzel übergibt den dateibasierten Speicher).
    pub fn with_config_store(configs: ConfigStore) -> Self {
        let model = crate::core::find_model(DEFAULT_MODEL_ID)
            .unwrap_or_else(|| ModelConfig {
                id: DEFAULT_MODEL_ID.to_string(),
                name: DEFAULT_MODEL_ID.to_string(),
            });
        let scene = scene_for(&model.id);
        Self {
            model,
            scene,
            hotspots: HotspotList::from_hotspots(initial_hotspots()),
            mode: ModeState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            configs,
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Hotspots zurück (für UI-Anzeige).
    pub fn hotspot_count(&self) -> usize {
        self.hotspots.len()
    }

    /// Gibt die Anzahl gespeicherter Konfigurationen zurück.
    pub fn config_count(&self) -> usize {
        self.configs.len()
    }

    /// Der aktuell bearbeitete Hotspot, falls vorhanden.
    pub fn editing_hotspot(&self) -> Option<&crate::core::Hotspot> {
        self.mode
            .editing_hotspot_id
            .as_deref()
            .and_then(|id| self.hotspots.get(id))
    }

    /// Der im View-Modus angeklickte Hotspot, falls vorhanden.
    pub fn active_hotspot(&self) -> Option<&crate::core::Hotspot> {
        self.mode
            .active_hotspot_id
            .as_deref()
            .and_then(|id| self.hotspots.get(id))
    }

    /// Treibt die Auto-Rotation um einen Frame voran.
    /// Im Bearbeiten-Modus (auch unter dem Overlay) pausiert die Drehung.
    pub fn tick_rotation(&mut self) {
        if self.view.auto_rotate && !self.mode.is_edit_beneath() {
            self.view.spin_angle += self.view.rotation_speed;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
