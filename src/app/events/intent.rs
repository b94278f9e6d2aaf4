use crate::core::Axis;
use glam::Vec2;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die Übersetzung in ausführbare Commands (inklusive Modus-Gating und
/// Eingabe-Validierung) übernimmt `intent_mapping`.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Bearbeiten-Modus umschalten (View ⇄ Edit)
    ToggleEditModeRequested,
    /// Speichern/Laden-Overlay öffnen
    OpenSaveLoadRequested,
    /// Speichern/Laden-Overlay schließen
    CloseSaveLoadRequested,
    /// Klick auf einen Hotspot-Marker (Liste oder 3D-Ansicht).
    /// Dieselbe Geste bedeutet je nach Modus Info-Auswahl oder
    /// Bearbeitungs-Auswahl.
    HotspotMarkerClicked { id: String },
    /// Hotspot explizit als Bearbeitungsziel gewählt (Seiten-Panel)
    HotspotSelectedForEdit { id: String },
    /// Info-Popup wurde geschlossen
    InfoPopupClosed,
    /// Neuen Hotspot anlegen
    AddHotspotRequested,
    /// Hotspot löschen
    DeleteHotspotRequested { id: String },
    /// Eine Positionskomponente eines Hotspots ändern (Regler/Zahlenfeld)
    UpdateHotspotPosition { id: String, axis: Axis, value: f32 },
    /// Titel eines Hotspots ändern
    UpdateHotspotTitle { id: String, title: String },
    /// Beschreibung eines Hotspots ändern
    UpdateHotspotDescription { id: String, description: String },
    /// Klick auf die 3D-Fläche (Pointer-Position viewport-lokal in Pixeln)
    SurfaceClicked { pointer: Vec2 },
    /// Aktuelle Hotspot-Liste unter einem Namen speichern
    SaveConfigurationRequested { name: String },
    /// Gespeicherte Konfiguration laden
    LoadConfigurationRequested { config_id: String },
    /// Gespeicherte Konfiguration löschen
    DeleteConfigurationRequested { config_id: String },
    /// Auto-Rotation pausieren/fortsetzen
    ToggleAutoRotateRequested,
    /// Drehgeschwindigkeit ändern
    SetRotationSpeedRequested { speed: f32 },
    /// Kamera um das Ziel drehen (Pointer-Delta in Pixeln)
    CameraOrbitRequested { delta: Vec2 },
    /// Kamera zoomen (rohes Scroll-Delta)
    CameraZoomRequested { scroll_delta: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anderes Modell aus dem Katalog gewählt
    ModelSelected { model_id: String },
    /// Anwendung beenden
    ExitRequested,
}
