//! Benannte, unveränderliche Snapshots der Hotspot-Liste.
//!
//! Die gesamte Sammlung wird bei jeder Mutation als JSON unter einem
//! festen Schlüssel neu serialisiert. Schreibfehler werden geloggt und
//! nicht in den In-Memory-Zustand zurückgereicht (fire-and-forget) —
//! der In-Memory-Bestand bleibt maßgeblich.

use super::storage::{KeyValueStore, MemoryStorage};
use crate::core::Hotspot;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fester Speicher-Schlüssel der Konfigurations-Sammlung.
pub const CONFIG_STORE_KEY: &str = "model-viewer-configs";

/// Ein benannter, zeitgestempelter Snapshot der Hotspot-Liste.
///
/// Nach dem Anlegen unveränderlich; Laden mutiert den Eintrag nie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    /// Opake ID (Namensraum `config-N`, getrennt von Hotspot-IDs)
    pub id: String,
    /// Anzeigename (nach Trimmen nicht leer; Namen dürfen doppelt sein)
    pub name: String,
    /// Erstellungszeitpunkt in Epoch-Millisekunden
    pub timestamp: u64,
    /// Tiefe Kopie der Hotspot-Liste zum Speicherzeitpunkt
    pub hotspots: Vec<Hotspot>,
    /// Modell, zu dem die Hotspots gehören
    #[serde(rename = "modelId")]
    pub model_id: String,
}

/// Verwaltet die geordnete Sammlung gespeicherter Konfigurationen.
pub struct ConfigStore {
    /// Sammlung in Anlage-Reihenfolge
    entries: Vec<SavedConfiguration>,
    /// Durabler Speicher
    storage: Box<dyn KeyValueStore>,
    /// Nächste laufende Nummer für `config-N`-IDs
    next_seq: u64,
}

impl ConfigStore {
    /// Initialisiert die Sammlung aus dem durablen Speicher.
    ///
    /// Fehlender Schlüssel ergibt eine leere Sammlung. Fehlerhafte
    /// persistierte Daten werden NICHT teilrepariert, der Fehler geht an
    /// die Kompositionswurzel.
    pub fn load(storage: Box<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let entries: Vec<SavedConfiguration> = match storage.read(CONFIG_STORE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let next_seq = entries
            .iter()
            .filter_map(|c| c.id.strip_prefix("config-"))
            .filter_map(|s| s.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        log::info!("{} gespeicherte Konfigurationen geladen", entries.len());
        Ok(Self {
            entries,
            storage,
            next_seq,
        })
    }

    /// Leere Sammlung über In-Memory-Speicher (Tests, Default-State).
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            storage: Box::new(MemoryStorage::new()),
            next_seq: 1,
        }
    }

    /// Legt einen neuen Snapshot an und persistiert die Sammlung.
    ///
    /// Leere Namen (nach Trimmen) werden ohne Seiteneffekt verworfen.
    /// Gibt den neuen Eintrag zurück, falls angelegt.
    pub fn save(
        &mut self,
        name: &str,
        hotspots: Vec<Hotspot>,
        model_id: &str,
    ) -> Option<&SavedConfiguration> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            log::warn!("Speichern verworfen: leerer Konfigurationsname");
            return None;
        }

        let config = SavedConfiguration {
            id: format!("config-{}", self.next_seq),
            name: trimmed.to_string(),
            timestamp: now_millis(),
            hotspots,
            model_id: model_id.to_string(),
        };
        self.next_seq += 1;
        log::info!("Konfiguration '{}' gespeichert ({})", config.name, config.id);
        self.entries.push(config);
        self.persist();
        self.entries.last()
    }

    /// Entfernt einen Eintrag (No-op bei unbekannter ID) und persistiert.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|c| c.id != id);
        let removed = self.entries.len() < before;
        if removed {
            log::info!("Konfiguration {} gelöscht", id);
            self.persist();
        }
        removed
    }

    /// Findet einen Eintrag nach ID.
    pub fn get(&self, id: &str) -> Option<&SavedConfiguration> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Iterator in Anlage-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SavedConfiguration> {
        self.entries.iter()
    }

    /// Anzahl gespeicherter Konfigurationen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Konfigurationen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialisiert die gesamte Sammlung in den durablen Speicher.
    /// Fehler werden geloggt, nie propagiert.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Konfigurations-Serialisierung fehlgeschlagen: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(CONFIG_STORE_KEY, &json) {
            log::error!("Konfigurations-Persistierung fehlgeschlagen: {e:#}");
        }
    }
}

/// Aktuelle Wanduhr-Zeit in Epoch-Millisekunden.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
