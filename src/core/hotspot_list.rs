//! Die zentrale Hotspot-Liste mit invariantensichernder Mutations-API.

use super::{Axis, Hotspot};
use glam::Vec3;
use indexmap::IndexMap;

/// Spawn-Position für neue Hotspots: knapp über der Basis des Objekts.
pub const HOTSPOT_SPAWN_POSITION: [f32; 3] = [0.0, 0.8, 0.0];

/// Platzhalter-Beschreibung für neu angelegte Hotspots.
pub const HOTSPOT_PLACEHOLDER_DESCRIPTION: &str =
    "Klicke im Bearbeiten-Modus auf das Modell, um diesen Hotspot zu positionieren.";

/// Container für alle Hotspots des aktuell angezeigten Modells.
///
/// IDs sind eindeutig und werden nie wiederverwendet (monotone Sequenz).
/// Die Einfüge-Reihenfolge bleibt für die Anzeige erhalten.
#[derive(Debug, Clone, Default)]
pub struct HotspotList {
    /// Alle Hotspots, indexiert nach ID, in Einfüge-Reihenfolge
    hotspots: IndexMap<String, Hotspot>,
    /// Nächste laufende Nummer für generierte IDs (`hotspot-N`)
    next_seq: u64,
}

impl HotspotList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            hotspots: IndexMap::new(),
            next_seq: 1,
        }
    }

    /// Erstellt eine Liste aus vorhandenen Hotspots (z.B. Demo-Bestand).
    ///
    /// Die ID-Sequenz wird über das höchste `hotspot-N`-Suffix gehoben,
    /// damit generierte IDs nie mit dem Bestand kollidieren.
    pub fn from_hotspots(hotspots: Vec<Hotspot>) -> Self {
        let mut list = Self::new();
        list.replace_all(hotspots);
        list
    }

    /// Erstellt einen neuen Hotspot mit frischer ID, Spawn-Position,
    /// durchnummeriertem Titel (`Hotspot N`, N = aktuelle Anzahl + 1)
    /// und Platzhalter-Beschreibung. Gibt die neue ID zurück.
    ///
    /// Die Titel-Nummerierung ist bewusst anzahlbasiert (nicht monoton):
    /// nach Löschen und erneutem Anlegen können Titel doppelt auftreten,
    /// IDs dagegen nie.
    pub fn add(&mut self) -> String {
        let id = self.fresh_id();
        let title = format!("Hotspot {}", self.hotspots.len() + 1);
        let hotspot = Hotspot::new(
            id.clone(),
            Vec3::from(HOTSPOT_SPAWN_POSITION),
            title,
            HOTSPOT_PLACEHOLDER_DESCRIPTION.to_string(),
        );
        self.hotspots.insert(id.clone(), hotspot);
        log::info!("Hotspot {} angelegt", id);
        id
    }

    /// Entfernt den Hotspot mit dieser ID. Kein Fehler bei unbekannter ID.
    /// Gibt `true` zurück, wenn ein Hotspot entfernt wurde.
    pub fn remove(&mut self, id: &str) -> bool {
        // shift_remove hält die Einfüge-Reihenfolge der übrigen Einträge
        let removed = self.hotspots.shift_remove(id).is_some();
        if removed {
            log::info!("Hotspot {} entfernt", id);
        }
        removed
    }

    /// Ersetzt eine einzelne Positionskomponente.
    ///
    /// Nicht-endliche Werte werden an der Eingabegrenze verworfen; diese
    /// Prüfung hier ist die zweite Verteidigungslinie. Unbekannte ID = No-op.
    pub fn set_axis(&mut self, id: &str, axis: Axis, value: f32) -> bool {
        if !value.is_finite() {
            log::warn!("Nicht-endlicher Positionswert für {} verworfen", id);
            return false;
        }
        let Some(hotspot) = self.hotspots.get_mut(id) else {
            return false;
        };
        hotspot.position[axis.index()] = value;
        true
    }

    /// Ersetzt die komplette Position atomar (Ray-Cast-Platzierung).
    pub fn set_position(&mut self, id: &str, position: Vec3) -> bool {
        if !position.is_finite() {
            log::warn!("Nicht-endliche Position für {} verworfen", id);
            return false;
        }
        let Some(hotspot) = self.hotspots.get_mut(id) else {
            return false;
        };
        hotspot.position = position;
        true
    }

    /// Ersetzt den Titel unverändert (auch Leerstring erlaubt).
    pub fn set_title(&mut self, id: &str, title: String) -> bool {
        let Some(hotspot) = self.hotspots.get_mut(id) else {
            return false;
        };
        hotspot.title = title;
        true
    }

    /// Ersetzt die Beschreibung unverändert (auch Leerstring erlaubt).
    pub fn set_description(&mut self, id: &str, description: String) -> bool {
        let Some(hotspot) = self.hotspots.get_mut(id) else {
            return false;
        };
        hotspot.description = description;
        true
    }

    /// Findet einen Hotspot nach ID.
    pub fn get(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.get(id)
    }

    /// Prüft ob eine ID existiert.
    pub fn contains(&self, id: &str) -> bool {
        self.hotspots.contains_key(id)
    }

    /// Iterator in Einfüge-Reihenfolge (read-only).
    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.values()
    }

    /// Tiefe Kopie aller Hotspots in Einfüge-Reihenfolge (für Snapshots).
    pub fn snapshot(&self) -> Vec<Hotspot> {
        self.hotspots.values().cloned().collect()
    }

    /// Ersetzt den gesamten Bestand (Konfiguration laden).
    ///
    /// Die ID-Sequenz wird über das höchste `hotspot-N`-Suffix des neuen
    /// Bestands gehoben, damit IDs auch über Ladevorgänge hinweg eindeutig
    /// bleiben.
    pub fn replace_all(&mut self, hotspots: Vec<Hotspot>) {
        self.hotspots.clear();
        for hotspot in hotspots {
            let suffix = hotspot
                .id
                .strip_prefix("hotspot-")
                .and_then(|s| s.parse::<u64>().ok());
            if let Some(n) = suffix {
                self.next_seq = self.next_seq.max(n + 1);
            }
            self.hotspots.insert(hotspot.id.clone(), hotspot);
        }
    }

    /// Gibt die Anzahl der Hotspots zurück.
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// Gibt `true` zurück, wenn keine Hotspots vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    /// Vergibt die nächste freie generierte ID.
    fn fresh_id(&mut self) -> String {
        let id = format!("hotspot-{}", self.next_seq);
        self.next_seq += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut list = HotspotList::new();
        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(list.add());
        }
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_add_numbers_titles_by_count() {
        let mut list = HotspotList::new();
        let a = list.add();
        let b = list.add();
        assert_eq!(list.get(&a).unwrap().title, "Hotspot 1");
        assert_eq!(list.get(&b).unwrap().title, "Hotspot 2");

        // Anzahlbasiert: nach Löschen des ersten ergibt erneutes Anlegen
        // wieder "Hotspot 2" — mit neuer, nie wiederverwendeter ID.
        list.remove(&a);
        let c = list.add();
        assert_eq!(list.get(&c).unwrap().title, "Hotspot 2");
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn test_add_uses_spawn_position() {
        let mut list = HotspotList::new();
        let id = list.add();
        assert_eq!(
            list.get(&id).unwrap().position,
            Vec3::from(HOTSPOT_SPAWN_POSITION)
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = HotspotList::new();
        let id = list.add();
        assert!(list.remove(&id));
        assert!(!list.remove(&id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_set_axis_round_trip() {
        let mut list = HotspotList::new();
        let id = list.add();
        assert!(list.set_axis(&id, Axis::Y, -3.25));
        assert_eq!(list.get(&id).unwrap().position.y, -3.25);
        assert!(list.set_axis(&id, Axis::X, 0.001));
        assert_eq!(list.get(&id).unwrap().position.x, 0.001);
    }

    #[test]
    fn test_set_axis_rejects_non_finite() {
        let mut list = HotspotList::new();
        let id = list.add();
        let before = list.get(&id).unwrap().position;
        assert!(!list.set_axis(&id, Axis::Z, f32::NAN));
        assert!(!list.set_axis(&id, Axis::Z, f32::INFINITY));
        assert_eq!(list.get(&id).unwrap().position, before);
    }

    #[test]
    fn test_set_axis_unknown_id_is_noop() {
        let mut list = HotspotList::new();
        assert!(!list.set_axis("gibt-es-nicht", Axis::X, 1.0));
    }

    #[test]
    fn test_set_title_and_description_verbatim() {
        let mut list = HotspotList::new();
        let id = list.add();
        assert!(list.set_title(&id, String::new()));
        assert!(list.set_description(&id, "  mit Leerraum  ".to_string()));
        assert_eq!(list.get(&id).unwrap().title, "");
        assert_eq!(list.get(&id).unwrap().description, "  mit Leerraum  ");
    }

    #[test]
    fn test_iteration_preserves_insertion_order_after_removal() {
        let mut list = HotspotList::new();
        let a = list.add();
        let b = list.add();
        let c = list.add();
        list.remove(&b);
        let order: Vec<&str> = list.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order, vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_replace_all_bumps_id_sequence() {
        let mut list = HotspotList::new();
        list.replace_all(vec![
            Hotspot::new("hotspot-7".into(), Vec3::ZERO, "A".into(), String::new()),
            Hotspot::new("demo-1".into(), Vec3::Y, "B".into(), String::new()),
        ]);
        let id = list.add();
        assert_eq!(id, "hotspot-8");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_snapshot_is_deep_copy() {
        let mut list = HotspotList::new();
        let id = list.add();
        let snap = list.snapshot();
        list.set_title(&id, "geändert".to_string());
        assert_eq!(snap[0].title, "Hotspot 1");
    }
}
