//! Snapshot persistence port
//!
//! The editing session only sees [`SnapshotStore`]; which storage technology
//! sits behind it is the host's choice.
//!
//! Persisted layout:
//!
//! ```json
//! {
//!   "styleConfig": { "paletteId": "y2k", "fontId": "inter", "buttonShapeId": "pill" },
//!   "sections": [ { "id": "hero", "type": "hero", "visible": true, "config": {} } ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_compose::CompositionModel;
use vitrine_theme::StyleConfig;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("snapshot at {path} is not valid JSON: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything needed to restore an editing session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub style_config: StyleConfig,
    /// Unknown or duplicate entries are dropped and missing built-ins restored
    #[serde(default)]
    pub sections: CompositionModel,
}

impl Snapshot {
    pub fn new(style_config: StyleConfig, sections: CompositionModel) -> Self {
        Self {
            style_config,
            sections,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load/save port injected into the editing session
pub trait SnapshotStore: Send {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Snapshot>, PersistError>;

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistError>;

    /// Move an unreadable snapshot out of the way before it is overwritten.
    ///
    /// Returns where the old data went, or `None` if the store keeps nothing.
    fn quarantine(&self) -> Result<Option<PathBuf>, PersistError> {
        Ok(None)
    }
}

/// Pretty-printed JSON file; writes go through a sibling temp file and a
/// rename so a crash never leaves a half-written snapshot
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "snapshot".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let snapshot = serde_json::from_str(&text).map_err(|source| PersistError::Decode {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistError> {
        let json = snapshot.to_json()?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let temp = self.sibling(".tmp");
        let written = fs::write(&temp, json);
        if let Err(err) = written.and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(err));
        }
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Renames the file to `<name>.corrupt`, replacing an older one
    fn quarantine(&self) -> Result<Option<PathBuf>, PersistError> {
        let target = self.sibling(".corrupt");
        match fs::rename(&self.path, &target) {
            Ok(()) => Ok(Some(target)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// In-process store holding the serialized snapshot
#[derive(Debug, Default)]
pub struct MemoryStore {
    json: Mutex<Option<String>>,
    quarantined: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw JSON, as if it had been saved earlier
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Mutex::new(Some(json.into())),
            quarantined: Mutex::new(None),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn json(&self) -> Option<String> {
        self.json
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// JSON moved aside by the last [`SnapshotStore::quarantine`]
    pub fn quarantined(&self) -> Option<String> {
        self.quarantined
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        let guard = self.json.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(json) = guard.as_deref() else {
            return Ok(None);
        };
        serde_json::from_str(json)
            .map(Some)
            .map_err(|source| PersistError::Decode {
                path: PathBuf::from("<memory>"),
                source,
            })
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistError> {
        let json = snapshot.to_json()?;
        *self.json.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, PersistError> {
        let taken = self
            .json
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let moved = taken.is_some();
        *self
            .quarantined
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = taken;
        Ok(moved.then(|| PathBuf::from("<memory>")))
    }
}

impl<T: SnapshotStore + Sync> SnapshotStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistError> {
        (**self).save(snapshot)
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, PersistError> {
        (**self).quarantine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_compose::BlockKind;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let snapshot: Snapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(snapshot.sections.len(), 6);
    }

    #[test]
    fn stale_entries_are_tolerated() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "styleConfig": { "paletteId": "retired-palette" },
            "sections": [
                { "id": "block-4", "type": "custom", "blockKind": "marquee" },
                { "id": "block-5", "type": "custom", "blockKind": "carousel" },
                "not even an object"
            ]
        }))
        .unwrap();

        assert_eq!(snapshot.style_config.palette_id, "retired-palette");
        assert_eq!(snapshot.style_config.font_id, "inter");
        assert_eq!(snapshot.sections.count_of(BlockKind::Marquee), 1);
        assert!(snapshot.sections.get("block-5").is_none());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let (sections, _) = CompositionModel::new()
            .add_block(BlockKind::Faq, "Questions")
            .unwrap();
        let snapshot = Snapshot::new(StyleConfig::default().with_palette("forest"), sections);
        store.save(&snapshot).unwrap();

        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "occupied").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.save(&Snapshot::default()),
            Err(PersistError::Io { .. })
        ));
        assert!(!dir.path().join("storefront.json.tmp").exists());
    }

    #[test]
    fn quarantine_moves_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        fs::write(&path, "{ broken").unwrap();

        let store = JsonFileStore::new(&path);
        let moved = store.quarantine().unwrap();
        assert_eq!(moved, Some(dir.path().join("storefront.json.corrupt")));
        assert_eq!(
            fs::read_to_string(dir.path().join("storefront.json.corrupt")).unwrap(),
            "{ broken"
        );
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.quarantine().unwrap(), None);
    }

    #[test]
    fn corrupt_memory_snapshot_is_a_decode_error() {
        let store = MemoryStore::with_json("{ nope");
        assert!(matches!(store.load(), Err(PersistError::Decode { .. })));
    }
}
