//! Plate size registry
//!
//! Static mapping from supported well counts to grid geometry.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Supported plate formats
///
/// Serialized as the plain well count (`6`, `12`, ... `384`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum PlateSize {
    /// 2 x 3
    Wells6,
    /// 3 x 4
    Wells12,
    /// 4 x 6
    Wells24,
    /// 6 x 8
    Wells48,
    /// 8 x 12
    #[default]
    Wells96,
    /// 16 x 24
    Wells384,
}

/// Grid geometry for one plate size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConfig {
    /// Number of rows (lettered A, B, ...)
    pub rows: u16,
    /// Number of columns (numbered from 1)
    pub cols: u16,
    /// Human-readable label for selectors
    pub label: &'static str,
}

impl PlateSize {
    /// All supported sizes, smallest first
    pub const ALL: [PlateSize; 6] = [
        PlateSize::Wells6,
        PlateSize::Wells12,
        PlateSize::Wells24,
        PlateSize::Wells48,
        PlateSize::Wells96,
        PlateSize::Wells384,
    ];

    /// Grid geometry for this size
    #[must_use]
    pub const fn config(self) -> SizeConfig {
        match self {
            PlateSize::Wells6 => SizeConfig { rows: 2, cols: 3, label: "6-well (2×3)" },
            PlateSize::Wells12 => SizeConfig { rows: 3, cols: 4, label: "12-well (3×4)" },
            PlateSize::Wells24 => SizeConfig { rows: 4, cols: 6, label: "24-well (4×6)" },
            PlateSize::Wells48 => SizeConfig { rows: 6, cols: 8, label: "48-well (6×8)" },
            PlateSize::Wells96 => SizeConfig { rows: 8, cols: 12, label: "96-well (8×12)" },
            PlateSize::Wells384 => SizeConfig { rows: 16, cols: 24, label: "384-well (16×24)" },
        }
    }

    /// Declared number of wells
    #[must_use]
    pub const fn well_count(self) -> u16 {
        match self {
            PlateSize::Wells6 => 6,
            PlateSize::Wells12 => 12,
            PlateSize::Wells24 => 24,
            PlateSize::Wells48 => 48,
            PlateSize::Wells96 => 96,
            PlateSize::Wells384 => 384,
        }
    }

    /// Look up a size by well count
    ///
    /// # Errors
    /// Returns [`ModelError::UnsupportedSize`] for any count outside the registry
    pub fn from_well_count(count: u16) -> Result<Self, ModelError> {
        match count {
            6 => Ok(PlateSize::Wells6),
            12 => Ok(PlateSize::Wells12),
            24 => Ok(PlateSize::Wells24),
            48 => Ok(PlateSize::Wells48),
            96 => Ok(PlateSize::Wells96),
            384 => Ok(PlateSize::Wells384),
            other => Err(ModelError::UnsupportedSize(other)),
        }
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(self) -> u16 {
        self.config().rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(self) -> u16 {
        self.config().cols
    }
}

impl Display for PlateSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.well_count())
    }
}

impl TryFrom<u16> for PlateSize {
    type Error = ModelError;

    fn try_from(count: u16) -> Result<Self, Self::Error> {
        Self::from_well_count(count)
    }
}

impl From<PlateSize> for u16 {
    fn from(size: PlateSize) -> Self {
        size.well_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn grid_matches_declared_count() {
        for size in PlateSize::ALL {
            let cfg = size.config();
            assert_eq!(cfg.rows * cfg.cols, size.well_count(), "{size}");
        }
    }

    #[test]
    fn registry_entries() {
        assert_eq!(PlateSize::Wells96.rows(), 8);
        assert_eq!(PlateSize::Wells96.cols(), 12);
        assert_eq!(PlateSize::Wells384.rows(), 16);
        assert_eq!(PlateSize::Wells384.cols(), 24);
    }

    #[test]
    fn serializes_as_well_count() {
        let json = serde_json::to_string(&PlateSize::Wells24).unwrap();
        assert_eq!(json, "24");
        let size: PlateSize = serde_json::from_str("384").unwrap();
        assert_eq!(size, PlateSize::Wells384);
        assert!(serde_json::from_str::<PlateSize>("100").is_err());
    }

    proptest! {
        #[test]
        fn only_registry_counts_resolve(count in 0u16..1000) {
            let supported = PlateSize::ALL.iter().any(|s| s.well_count() == count);
            prop_assert_eq!(PlateSize::from_well_count(count).is_ok(), supported);
        }
    }
}
