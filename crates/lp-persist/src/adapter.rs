//! Persistence adapter
//!
//! Read-at-startup, write-on-change mirror of the application state. The
//! adapter holds no copy of the state; it only encodes what it is handed.

use crate::error::StorageError;
use crate::keys::StorageKeys;
use crate::kv::KeyValueStore;
use lp_model::PlateId;
use lp_state::{AppState, ChangeSet, PlateStore, ReagentStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Per-key load result
///
/// `None` means the key was absent, unreadable or malformed; the caller
/// substitutes its built-in default for that key alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    /// Reagent list
    pub reagents: Option<ReagentStore>,
    /// Plate list (non-empty, wells in bounds, unique ids)
    pub plates: Option<PlateStore>,
    /// Theme flag
    pub dark: Option<bool>,
    /// Active plate id (not checked against `plates`)
    pub active_plate: Option<PlateId>,
}

/// Key-value mirror of the application state
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Create adapter over `store`
    #[inline]
    #[must_use]
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key names in use
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Release the underlying store
    #[inline]
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Read every key, falling back per key
    ///
    /// Never fails: read and parse problems are logged and reported as
    /// `None` for the affected key.
    #[must_use]
    pub fn load(&self) -> Loaded {
        let active_plate = self
            .read_raw(&self.keys.active_plate)
            .filter(|id| !id.is_empty())
            .map(PlateId::new);

        Loaded {
            reagents: self.read_json(&self.keys.reagents),
            plates: self.read_json(&self.keys.plates),
            dark: self.read_json(&self.keys.dark),
            active_plate,
        }
    }

    /// Write the reagent list
    ///
    /// # Errors
    /// Returns an error if encoding or the store write fails
    pub fn save_reagents(&mut self, reagents: &ReagentStore) -> Result<(), StorageError> {
        let key = self.keys.reagents.clone();
        self.write_json(&key, reagents)
    }

    /// Write the plate list
    ///
    /// # Errors
    /// Returns an error if encoding or the store write fails
    pub fn save_plates(&mut self, plates: &PlateStore) -> Result<(), StorageError> {
        let key = self.keys.plates.clone();
        self.write_json(&key, plates)
    }

    /// Write the theme flag
    ///
    /// # Errors
    /// Returns an error if the store write fails
    pub fn save_dark(&mut self, dark: bool) -> Result<(), StorageError> {
        let key = self.keys.dark.clone();
        self.write_json(&key, &dark)
    }

    /// Write the active plate id (plain string, not JSON)
    ///
    /// # Errors
    /// Returns an error if the store write fails
    pub fn save_active_plate(&mut self, id: &PlateId) -> Result<(), StorageError> {
        self.store.set(&self.keys.active_plate, id.as_str())
    }

    /// Write every key named in `changes`
    ///
    /// Fire-and-forget: each key is attempted independently, failures are
    /// logged and returned, and nothing is rolled back.
    pub fn write_through(&mut self, state: &AppState, changes: ChangeSet) -> Vec<StorageError> {
        let mut failures = Vec::new();
        let mut record = |key: &str, result: Result<(), StorageError>| {
            match result {
                Ok(()) => tracing::debug!(key, "persisted"),
                Err(e) => {
                    tracing::warn!(key, error = %e, "write failed; in-memory state kept");
                    failures.push(e);
                }
            }
        };

        if changes.reagents {
            let result = self.save_reagents(state.reagents());
            record(&self.keys.reagents, result);
        }
        if changes.plates {
            let result = self.save_plates(state.plates());
            record(&self.keys.plates, result);
        }
        if changes.dark {
            let result = self.save_dark(state.is_dark());
            record(&self.keys.dark, result);
        }
        if changes.active_plate {
            let result = self.save_active_plate(state.active_plate_id());
            record(&self.keys.active_plate, result);
        }
        failures
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                tracing::debug!(key, "no persisted value; using default");
                None
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed; using default");
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.read_raw(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed persisted value; using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use lp_model::{HexColor, Plate, PlateSize, Reagent, ReagentId, WellKey};
    use lp_state::FillSettings;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let reagents = ReagentStore::new(vec![Reagent::new(
            ReagentId::new("r1"),
            "Compound A",
            HexColor::from_rgb(0x3b, 0x82, 0xf6),
        )])
        .unwrap();
        let plates = PlateStore::new(vec![
            Plate::new(PlateId::new("p1"), "Plate 1", PlateSize::Wells96),
            Plate::new(PlateId::new("p2"), "Plate 2", PlateSize::Wells24),
        ])
        .unwrap();
        let mut state =
            AppState::new(reagents, plates, Some(PlateId::new("p2")), true, FillSettings::enabled("50", "µM"));
        let _ = state.paint(WellKey::new(3, 5)).unwrap();
        state
    }

    #[test]
    fn empty_store_loads_nothing() {
        let p = Persistence::new(MemoryStore::new(), StorageKeys::default());
        assert_eq!(p.load(), Loaded::default());
    }

    #[test]
    fn round_trip_reproduces_state() {
        let original = state();
        let mut p = Persistence::new(MemoryStore::new(), StorageKeys::default());
        let all = ChangeSet::REAGENTS | ChangeSet::PLATES | ChangeSet::DARK | ChangeSet::ACTIVE_PLATE;
        assert!(p.write_through(&original, all).is_empty());

        let loaded = p.load();
        let rebuilt = AppState::new(
            loaded.reagents.unwrap(),
            loaded.plates.unwrap(),
            loaded.active_plate,
            loaded.dark.unwrap(),
            original.fill().clone(),
        );
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn active_plate_is_a_plain_string() {
        let original = state();
        let mut p = Persistence::new(MemoryStore::new(), StorageKeys::default());
        let _ = p.write_through(&original, ChangeSet::ACTIVE_PLATE);
        assert_eq!(p.store().raw("lp_activePlateId"), Some("p2"));
        assert_eq!(p.store().len(), 1);
    }

    #[test]
    fn plates_wire_shape() {
        let original = state();
        let mut p = Persistence::new(MemoryStore::new(), StorageKeys::default());
        let _ = p.write_through(&original, ChangeSet::PLATES);

        let json: serde_json::Value =
            serde_json::from_str(p.store().raw("lp_plates").unwrap()).unwrap();
        assert_eq!(json[1]["id"], "p2");
        assert_eq!(json[1]["size"], 24);
        assert_eq!(
            json[1]["wells"]["3-5"],
            serde_json::json!({ "reagentId": "r1", "value": "50", "unit": "µM" })
        );
    }

    #[test]
    fn malformed_keys_fall_back_independently() {
        let store = MemoryStore::new()
            .with_entry("lp_reagents", "not json")
            .with_entry("lp_plates", "[]")
            .with_entry("lp_dark", "true")
            .with_entry("lp_activePlateId", "p9");
        let loaded = Persistence::new(store, StorageKeys::default()).load();

        assert_eq!(loaded.reagents, None);
        assert_eq!(loaded.plates, None);
        assert_eq!(loaded.dark, Some(true));
        assert_eq!(loaded.active_plate, Some(PlateId::new("p9")));
    }

    #[test]
    fn out_of_bounds_wells_reject_the_plate_list() {
        let plates = r#"[{ "id": "p1", "name": "Plate 1", "size": 6,
            "wells": { "5-5": { "reagentId": "r1", "value": null, "unit": null } } }]"#;
        let store = MemoryStore::new().with_entry("lp_plates", plates);
        assert_eq!(Persistence::new(store, StorageKeys::default()).load().plates, None);
    }

    #[test]
    fn custom_key_names() {
        let mut p = Persistence::new(MemoryStore::new(), StorageKeys::with_prefix("test_"));
        p.save_dark(true).unwrap();
        assert_eq!(p.store().raw("test_dark"), Some("true"));
        assert_eq!(p.load().dark, Some(true));
    }
}
