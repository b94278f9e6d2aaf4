use crate::core::Axis;
use glam::Vec2;

/// Mutierende App-Commands, ausgeführt vom Controller.
///
/// Commands entstehen ausschließlich über das Intent-Mapping; zu diesem
/// Zeitpunkt sind Modus-Gating und Eingabe-Validierung bereits erfolgt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// View ⇄ Edit wechseln (löscht die jeweilige Auswahl)
    ToggleEditMode,
    /// Speichern/Laden-Overlay öffnen (Zustand darunter bleibt erhalten)
    OpenSaveLoad,
    /// Overlay schließen und vorherigen Modus wiederherstellen
    CloseSaveLoad,
    /// Hotspot für das Info-Popup auswählen (View-Modus)
    SelectHotspotForInfo { id: String },
    /// Hotspot als Bearbeitungsziel auswählen (Edit-Modus)
    SelectHotspotForEditing { id: String },
    /// Aktive Info-Auswahl löschen (Popup geschlossen)
    ClearInfoSelection,
    /// Neuen Hotspot anlegen und als Bearbeitungsziel setzen
    AddHotspot,
    /// Hotspot löschen (räumt hängende Auswahl-Referenzen auf)
    DeleteHotspot { id: String },
    /// Eine Positionskomponente setzen (Wert bereits endlich geprüft)
    SetHotspotAxis { id: String, axis: Axis, value: f32 },
    /// Titel setzen (unverändert, auch leer)
    SetHotspotTitle { id: String, title: String },
    /// Beschreibung setzen (unverändert, auch leer)
    SetHotspotDescription { id: String, description: String },
    /// Bearbeitungsziel per Ray-Cast auf die angeklickte Fläche setzen
    PlaceEditedHotspot { pointer: Vec2 },
    /// Snapshot der Hotspot-Liste speichern (Name bereits nicht-leer geprüft)
    SaveConfiguration { name: String },
    /// Konfiguration laden: Liste ersetzen, Auswahl löschen, Overlay schließen
    LoadConfiguration { config_id: String },
    /// Konfiguration aus der Sammlung entfernen
    DeleteConfiguration { config_id: String },
    /// Auto-Rotation pausieren/fortsetzen
    ToggleAutoRotate,
    /// Drehgeschwindigkeit setzen
    SetRotationSpeed { speed: f32 },
    /// Kamera um das Ziel drehen (Radiant-Deltas)
    OrbitCamera { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera-Abstand um Faktor ändern
    ZoomCamera { factor: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe übernehmen
    SetViewportSize { size: [f32; 2] },
    /// Modell wechseln (setzt Hotspots und Ansicht zurück)
    SwitchModel { model_id: String },
    /// Anwendung beenden
    RequestExit,
}
