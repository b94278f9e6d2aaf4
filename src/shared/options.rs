//! Zentrale Konfiguration für den Hotspot-Modell-Viewer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker-Rendering ───────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Klick-Radius für Marker-Treffer in Screen-Pixeln.
pub const MARKER_HIT_RADIUS_PX: f32 = 12.0;
/// Standard-Farbe normaler Marker (RGBA: Cyan).
pub const MARKER_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für den aktiven Marker im View-Modus (RGBA: Magenta).
pub const MARKER_COLOR_ACTIVE: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe für den in Bearbeitung befindlichen Marker (RGBA: Gelb).
pub const MARKER_COLOR_EDITING: [f32; 4] = [1.0, 0.9, 0.1, 1.0];

// ── Flächen-Rendering ──────────────────────────────────────────────

/// Linienfarbe der Modell-Hüllflächen (RGBA).
pub const SURFACE_COLOR: [f32; 4] = [0.39, 0.4, 0.95, 1.0];
/// Linienfarbe der Basis-Scheibe (RGBA).
pub const GROUND_COLOR: [f32; 4] = [0.35, 0.35, 0.5, 1.0];

// ── Kamera & Rotation ──────────────────────────────────────────────

/// Orbit-Empfindlichkeit in Radiant pro Pixel Drag.
pub const ORBIT_SENSITIVITY: f32 = 0.008;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Standard-Drehgeschwindigkeit der Auto-Rotation (Radiant pro Frame).
pub const ROTATION_SPEED_DEFAULT: f32 = 0.005;
/// Maximale Drehgeschwindigkeit im Geschwindigkeits-Regler.
pub const ROTATION_SPEED_MAX: f32 = 0.02;

// ── Positions-Regler ───────────────────────────────────────────────

/// Wertebereich der Achsen-Regler im Bearbeiten-Panel.
pub const AXIS_RANGE: f32 = 5.0;

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `hotspot_model_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Klick-Radius für Marker-Treffer in Screen-Pixeln
    pub marker_hit_radius_px: f32,
    /// Standard-Farbe normaler Marker (RGBA)
    pub marker_color: [f32; 4],
    /// Farbe des aktiven Markers im View-Modus
    pub marker_color_active: [f32; 4],
    /// Farbe des Markers in Bearbeitung
    pub marker_color_editing: [f32; 4],
    /// Linienfarbe der Modell-Hüllflächen
    pub surface_color: [f32; 4],
    /// Linienfarbe der Basis-Scheibe
    pub ground_color: [f32; 4],
    /// Orbit-Empfindlichkeit in Radiant pro Pixel
    pub orbit_sensitivity: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub scroll_zoom_step: f32,
    /// Standard-Drehgeschwindigkeit (Radiant pro Frame)
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed_default: f32,
    /// Wertebereich der Achsen-Regler
    #[serde(default = "default_axis_range")]
    pub axis_range: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_radius_px: MARKER_RADIUS_PX,
            marker_hit_radius_px: MARKER_HIT_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_active: MARKER_COLOR_ACTIVE,
            marker_color_editing: MARKER_COLOR_EDITING,
            surface_color: SURFACE_COLOR,
            ground_color: GROUND_COLOR,
            orbit_sensitivity: ORBIT_SENSITIVITY,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            rotation_speed_default: ROTATION_SPEED_DEFAULT,
            axis_range: AXIS_RANGE,
        }
    }
}

/// Serde-Default für `rotation_speed_default` (Abwärtskompatibilität).
fn default_rotation_speed() -> f32 {
    ROTATION_SPEED_DEFAULT
}

/// Serde-Default für `axis_range` (Abwärtskompatibilität).
fn default_axis_range() -> f32 {
    AXIS_RANGE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hotspot_model_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hotspot_model_viewer.toml")
    }
}
