//! Plates and their sparse well maps

use crate::error::ModelError;
use crate::ids::{PlateId, ReagentId};
use crate::size::PlateSize;
use crate::well::{WellData, WellKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A multi-well plate
///
/// # Invariant
/// Every key in the well map addresses a cell of the current `size`. The map
/// is cleared whenever the size changes, and [`Plate::set_well`] refuses
/// out-of-range keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plate {
    id: PlateId,
    name: String,
    size: PlateSize,
    #[serde(default)]
    wells: BTreeMap<WellKey, WellData>,
}

impl Plate {
    /// Create an empty plate
    #[must_use]
    pub fn new(id: PlateId, name: impl Into<String>, size: PlateSize) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            wells: BTreeMap::new(),
        }
    }

    /// Plate id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &PlateId {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current layout
    #[inline]
    #[must_use]
    pub fn size(&self) -> PlateSize {
        self.size
    }

    /// Painted wells, ordered by `(row, col)`
    #[inline]
    #[must_use]
    pub fn wells(&self) -> &BTreeMap<WellKey, WellData> {
        &self.wells
    }

    /// Contents of one well (`None` = empty)
    #[inline]
    #[must_use]
    pub fn well(&self, key: WellKey) -> Option<&WellData> {
        self.wells.get(&key)
    }

    /// Rename the plate, leaving wells untouched
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Change the layout
    ///
    /// A different size clears every well; the same size is a no-op.
    /// Returns `true` when the wells were cleared.
    pub fn resize(&mut self, size: PlateSize) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.wells.clear();
        true
    }

    /// Write one well, replacing whatever was there
    ///
    /// # Errors
    /// Returns [`ModelError::OutOfBounds`] if `key` does not fit the plate
    pub fn set_well(&mut self, key: WellKey, data: WellData) -> Result<Option<WellData>, ModelError> {
        let key = key.check(self.size)?;
        Ok(self.wells.insert(key, data))
    }

    /// Empty one well, returning what it held
    pub fn clear_well(&mut self, key: WellKey) -> Option<WellData> {
        self.wells.remove(&key)
    }

    /// Number of painted wells
    #[inline]
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.wells.len()
    }

    /// Painted-well count per referenced reagent id
    ///
    /// Ids of deleted reagents are counted too.
    #[must_use]
    pub fn usage(&self) -> BTreeMap<&ReagentId, usize> {
        let mut counts = BTreeMap::new();
        for data in self.wells.values() {
            *counts.entry(&data.reagent_id).or_insert(0) += 1;
        }
        counts
    }

    /// Check the well-map invariant (used after deserialization)
    ///
    /// # Errors
    /// Returns the first out-of-range well found
    pub fn validate(&self) -> Result<(), ModelError> {
        self.wells
            .keys()
            .try_for_each(|key| key.check(self.size).map(|_| ()))
    }
}
