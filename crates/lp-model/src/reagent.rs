//! Reagents

use crate::color::HexColor;
use crate::ids::ReagentId;
use serde::{Deserialize, Serialize};

/// A named, colored substance that can be painted into wells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reagent {
    /// Unique id within the reagent store
    pub id: ReagentId,
    /// Display name
    pub name: String,
    /// Fill color of wells holding this reagent
    pub color: HexColor,
}

impl Reagent {
    /// Create a reagent
    #[must_use]
    pub fn new(id: ReagentId, name: impl Into<String>, color: HexColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}
