use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein benannter, beschriebener Punkt, der an einer 3D-Koordinate
/// auf oder nahe dem dargestellten Objekt verankert ist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Opake, innerhalb der Liste eindeutige ID (wird nie wiederverwendet)
    pub id: String,
    /// Position in Modell-Koordinaten (alle Komponenten endlich)
    pub position: Vec3,
    /// Anzeigename
    pub title: String,
    /// Freitext-Beschreibung
    pub description: String,
}

impl Hotspot {
    /// Erstellt einen neuen Hotspot.
    pub fn new(id: String, position: Vec3, title: String, description: String) -> Self {
        Self {
            id,
            position,
            title,
            description,
        }
    }
}

/// Eine der drei Positionsachsen eines Hotspots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle Achsen in Anzeigereihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Komponenten-Index in einem `Vec3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Kurzbezeichnung für UI-Labels.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}
