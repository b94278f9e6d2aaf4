//! Viewer-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render`/`ui` sie konsumieren.
//! Wird pro Frame aus dem AppState abgeleitet und hat keinen eigenen Zustand.

use super::options::EditorOptions;
use crate::core::{Hotspot, ModelConfig, OrbitCamera, SceneModel};
use crate::persistence::SavedConfiguration;

/// Ein Hotspot mit seinen abgeleiteten Hervorhebungs-Flags.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotMarker {
    /// Der Hotspot selbst
    pub hotspot: Hotspot,
    /// Im View-Modus angeklickt (Info-Popup offen)
    pub is_active: bool,
    /// Im Bearbeiten-Modus als Bearbeitungsziel ausgewählt
    pub is_editing: bool,
}

/// Read-only Daten für einen Frame: Marker, Panel-Sichtbarkeiten, Kamera.
#[derive(Clone)]
pub struct ViewerScene {
    /// Alle Hotspots in Anzeigereihenfolge mit Hervorhebungs-Flags
    pub markers: Vec<HotspotMarker>,
    /// Vollständiger Datensatz des aktuell bearbeiteten Hotspots
    pub editing_hotspot: Option<Hotspot>,
    /// Hotspot für das Info-Popup (nur im View-Modus gesetzt)
    pub info_hotspot: Option<Hotspot>,
    /// Ob der Bearbeiten-Modus aktiv ist (zeigt das Seiten-Panel)
    pub edit_mode: bool,
    /// Ob das Speichern/Laden-Overlay offen ist
    pub save_overlay_visible: bool,
    /// Gespeicherte Konfigurationen in Anlage-Reihenfolge
    pub configs: Vec<SavedConfiguration>,
    /// Kamera-Zustand für diesen Frame
    pub camera: OrbitCamera,
    /// Akkumulierter Drehwinkel der Auto-Rotation (Radiant)
    pub spin_angle: f32,
    /// Ob die Auto-Rotation läuft
    pub auto_rotate: bool,
    /// Drehgeschwindigkeit (Radiant pro Frame)
    pub rotation_speed: f32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Schnittflächen des aktuellen Modells
    pub surfaces: SceneModel,
    /// Aktuelles Modell
    pub model: ModelConfig,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl ViewerScene {
    /// Gibt zurück, ob aktuell ein Hotspot zur Bearbeitung ausgewählt ist.
    pub fn has_editing_target(&self) -> bool {
        self.editing_hotspot.is_some()
    }
}
