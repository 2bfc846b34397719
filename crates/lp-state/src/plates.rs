//! Plate store

use crate::error::StateError;
use lp_model::{ModelError, Plate, PlateId, PlateSize};
use serde::{Deserialize, Serialize};

/// Ordered, never-empty collection of plates
///
/// Plates are addressed by id, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Plate>", into = "Vec<Plate>")]
pub struct PlateStore {
    plates: Vec<Plate>,
}

impl PlateStore {
    /// Build a store from loaded or seeded plates
    ///
    /// # Errors
    /// - [`StateError::NoPlates`] for an empty list
    /// - [`ModelError::DuplicatePlateId`] for repeated ids
    /// - [`ModelError::OutOfBounds`] for wells outside their plate
    pub fn new(plates: Vec<Plate>) -> Result<Self, StateError> {
        if plates.is_empty() {
            return Err(StateError::NoPlates);
        }
        for (i, plate) in plates.iter().enumerate() {
            plate.validate()?;
            if plates[..i].iter().any(|p| p.id() == plate.id()) {
                return Err(ModelError::DuplicatePlateId(plate.id().to_string()).into());
            }
        }
        Ok(Self { plates })
    }

    /// Store holding one blank plate
    #[must_use]
    pub fn with_blank_plate(id: PlateId, name: impl Into<String>, size: PlateSize) -> Self {
        Self {
            plates: vec![Plate::new(id, name, size)],
        }
    }

    /// Plates in display order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Plate] {
        &self.plates
    }

    /// Iterate in display order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter()
    }

    /// Number of plates (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Always `false`; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// First plate in list order
    #[inline]
    #[must_use]
    pub fn first(&self) -> &Plate {
        // non-empty by construction
        &self.plates[0]
    }

    /// Look up a plate
    #[must_use]
    pub fn get(&self, id: &PlateId) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id() == id)
    }

    /// Look up a plate for mutation
    pub fn get_mut(&mut self, id: &PlateId) -> Option<&mut Plate> {
        self.plates.iter_mut().find(|p| p.id() == id)
    }

    /// Check if a plate exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &PlateId) -> bool {
        self.get(id).is_some()
    }

    /// Append a plate
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicatePlateId`] if the id is taken
    pub fn push(&mut self, plate: Plate) -> Result<(), StateError> {
        if self.contains(plate.id()) {
            return Err(ModelError::DuplicatePlateId(plate.id().to_string()).into());
        }
        plate.validate()?;
        self.plates.push(plate);
        Ok(())
    }

    /// Remove a plate, returning it
    ///
    /// # Errors
    /// - [`StateError::UnknownPlate`] if the id is absent
    /// - [`StateError::LastPlate`] if it is the only plate
    pub fn remove(&mut self, id: &PlateId) -> Result<Plate, StateError> {
        let index = self
            .plates
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| StateError::UnknownPlate(id.clone()))?;
        if self.plates.len() == 1 {
            return Err(StateError::LastPlate(id.clone()));
        }
        Ok(self.plates.remove(index))
    }
}

impl TryFrom<Vec<Plate>> for PlateStore {
    type Error = StateError;

    fn try_from(plates: Vec<Plate>) -> Result<Self, Self::Error> {
        Self::new(plates)
    }
}

impl From<PlateStore> for Vec<Plate> {
    fn from(store: PlateStore) -> Self {
        store.plates
    }
}
