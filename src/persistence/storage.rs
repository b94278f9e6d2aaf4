//! Durabler Key-Value-Speicher für die Konfigurations-Sammlung.

use anyhow::Context;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Schmaler Vertrag zum durablen Speicher: ein String-Wert pro Schlüssel.
pub trait KeyValueStore {
    /// Liest den Wert zu einem Schlüssel. `None` = Schlüssel nicht vorhanden.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Schreibt den Wert zu einem Schlüssel (ersetzt vorhandene Daten).
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Dateibasierter Speicher: eine JSON-Datei pro Schlüssel neben der Binary.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Erstellt einen Speicher in einem beliebigen Verzeichnis.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Ermittelt das Verzeichnis neben der Binary.
    pub fn next_to_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Lesen fehlgeschlagen: {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Schreiben fehlgeschlagen: {}", path.display()))
    }
}

/// In-Memory-Speicher mit geteiltem Backing (Tests, Default-State).
///
/// Klone teilen sich denselben Inhalt, so lässt sich in Tests prüfen,
/// was tatsächlich persistiert wurde. Single-threaded per Design.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Erstellt einen leeren In-Memory-Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Befüllt einen Schlüssel vorab (Test-Setup).
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());
        storage.write("k", "wert").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("wert"));
    }

    #[test]
    fn test_memory_storage_clones_share_backing() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.write("k", "geteilt").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("geteilt"));
    }
}
