//! Modell-Katalog: anzeigbare Objekte mit ihren Schnittflächen.

use super::scene::{SceneModel, SceneSurface};
use super::Hotspot;
use glam::Vec3;

/// ID des Standard-Modells beim Start.
pub const DEFAULT_MODEL_ID: &str = "lounge-chair";

/// Ein Eintrag im Modell-Katalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Opake Modell-ID (Namensraum der SavedConfiguration-Zuordnung)
    pub id: String,
    /// Anzeigename für den Modell-Umschalter
    pub name: String,
}

impl ModelConfig {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Alle anzeigbaren Modelle in Anzeigereihenfolge.
pub fn model_catalog() -> Vec<ModelConfig> {
    vec![
        ModelConfig::new("lounge-chair", "1960s Danish Chair"),
        ModelConfig::new("demo", "Demo-Szene"),
    ]
}

/// Findet einen Katalog-Eintrag nach ID.
pub fn find_model(model_id: &str) -> Option<ModelConfig> {
    model_catalog().into_iter().find(|m| m.id == model_id)
}

/// Baut die Schnittflächen-Szene eines Modells.
///
/// Die Flächen sind grobe analytische Hüllen der jeweiligen Geometrie;
/// sie dienen ausschließlich der Hotspot-Platzierung, nicht der Darstellung
/// von Material oder Beleuchtung.
pub fn scene_for(model_id: &str) -> SceneModel {
    match model_id {
        "demo" => demo_scene(),
        _ => chair_scene(),
    }
}

/// Demo-Szene: Würfel, schwebende Kugeln, Torus (als Kugel genähert),
/// Basis-Plattform.
fn demo_scene() -> SceneModel {
    SceneModel::new(vec![
        SceneSurface::Cuboid {
            center: Vec3::new(0.0, 0.75, 0.0),
            half_extents: Vec3::splat(0.75),
        },
        SceneSurface::Sphere {
            center: Vec3::new(1.5, 1.2, 0.0),
            radius: 0.3,
        },
        SceneSurface::Sphere {
            center: Vec3::new(-1.3, 0.8, 0.8),
            radius: 0.25,
        },
        SceneSurface::Sphere {
            center: Vec3::new(0.5, 2.0, -0.5),
            radius: 0.2,
        },
        SceneSurface::Sphere {
            center: Vec3::new(-1.2, 1.5, -0.8),
            radius: 0.65,
        },
        SceneSurface::Disc {
            center: Vec3::ZERO,
            normal: Vec3::Y,
            radius: 2.0,
        },
    ])
}

/// Sessel-Szene: Sitzfläche, Lehne und Armlehnen als Quader-Hüllen.
fn chair_scene() -> SceneModel {
    SceneModel::new(vec![
        SceneSurface::Cuboid {
            center: Vec3::new(0.0, 0.45, 0.0),
            half_extents: Vec3::new(0.45, 0.1, 0.45),
        },
        SceneSurface::Cuboid {
            center: Vec3::new(0.0, 0.95, -0.38),
            half_extents: Vec3::new(0.45, 0.45, 0.08),
        },
        SceneSurface::Cuboid {
            center: Vec3::new(-0.48, 0.62, 0.0),
            half_extents: Vec3::new(0.06, 0.08, 0.4),
        },
        SceneSurface::Cuboid {
            center: Vec3::new(0.48, 0.62, 0.0),
            half_extents: Vec3::new(0.06, 0.08, 0.4),
        },
        SceneSurface::Disc {
            center: Vec3::ZERO,
            normal: Vec3::Y,
            radius: 2.0,
        },
    ])
}

/// Anfangsbestand an Hotspots beim Start und nach Modell-Wechsel.
pub fn initial_hotspots() -> Vec<Hotspot> {
    vec![Hotspot::new(
        "demo-1".to_string(),
        Vec3::new(0.0, 1.0, 0.0),
        "Feature Point".to_string(),
        "Ein interaktiver Hotspot. Im Bearbeiten-Modus auf das Modell klicken, \
         um ihn neu zu positionieren."
            .to_string(),
    )]
}
