//! Reagent store

use lp_model::{HexColor, ModelError, Reagent, ReagentId};
use serde::{Deserialize, Serialize};

/// Ordered collection of reagents with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Reagent>", into = "Vec<Reagent>")]
pub struct ReagentStore {
    reagents: Vec<Reagent>,
}

/// Editable reagent field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReagentField {
    /// Display name
    Name(String),
    /// Fill color
    Color(HexColor),
}

impl ReagentStore {
    /// Build a store, rejecting duplicate ids
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateReagentId`] on the first repeated id
    pub fn new(reagents: Vec<Reagent>) -> Result<Self, ModelError> {
        let mut store = Self::default();
        for reagent in reagents {
            store.push(reagent)?;
        }
        Ok(store)
    }

    /// Reagents in display order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Reagent] {
        &self.reagents
    }

    /// Iterate in display order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Reagent> {
        self.reagents.iter()
    }

    /// Number of reagents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.reagents.len()
    }

    /// Check if the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reagents.is_empty()
    }

    /// Look up a reagent
    #[must_use]
    pub fn get(&self, id: &ReagentId) -> Option<&Reagent> {
        self.reagents.iter().find(|r| &r.id == id)
    }

    /// Check if a reagent exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &ReagentId) -> bool {
        self.get(id).is_some()
    }

    /// Append a reagent
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateReagentId`] if the id is already present
    pub fn push(&mut self, reagent: Reagent) -> Result<(), ModelError> {
        if self.contains(&reagent.id) {
            return Err(ModelError::DuplicateReagentId(reagent.id.to_string()));
        }
        self.reagents.push(reagent);
        Ok(())
    }

    /// Edit one field in place; returns `false` if the id is absent
    pub fn update(&mut self, id: &ReagentId, field: ReagentField) -> bool {
        let Some(reagent) = self.reagents.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        match field {
            ReagentField::Name(name) => reagent.name = name,
            ReagentField::Color(color) => reagent.color = color,
        }
        true
    }

    /// Remove a reagent, returning it
    pub fn remove(&mut self, id: &ReagentId) -> Option<Reagent> {
        let index = self.reagents.iter().position(|r| &r.id == id)?;
        Some(self.reagents.remove(index))
    }
}

impl TryFrom<Vec<Reagent>> for ReagentStore {
    type Error = ModelError;

    fn try_from(reagents: Vec<Reagent>) -> Result<Self, Self::Error> {
        Self::new(reagents)
    }
}

impl From<ReagentStore> for Vec<Reagent> {
    fn from(store: ReagentStore) -> Self {
        store.reagents
    }
}
