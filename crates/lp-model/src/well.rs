//! Well addressing and per-well contents

use crate::error::ModelError;
use crate::ids::ReagentId;
use crate::size::PlateSize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Zero-based well address within a plate
///
/// Ordered numerically by `(row, col)`. The text form `"{row}-{col}"` is only
/// used as the JSON map key; it is never sorted or compared as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WellKey {
    /// Row index (0 = row A)
    pub row: u16,
    /// Column index (0 = column 1)
    pub col: u16,
}

impl WellKey {
    /// Create a well key
    #[inline]
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Check that this key addresses a cell of a plate of `size`
    #[inline]
    #[must_use]
    pub const fn fits(self, size: PlateSize) -> bool {
        self.row < size.rows() && self.col < size.cols()
    }

    /// Ensure this key addresses a cell of a plate of `size`
    ///
    /// # Errors
    /// Returns [`ModelError::OutOfBounds`] when row or column exceed the grid
    pub fn check(self, size: PlateSize) -> Result<Self, ModelError> {
        if self.fits(size) {
            Ok(self)
        } else {
            Err(ModelError::OutOfBounds { key: self, size })
        }
    }

    /// Spreadsheet-style label: row letter + 1-based column (`A1`, `H12`, `P24`)
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", row_letters(self.row), self.col + 1)
    }
}

/// Row letters past `Z` continue as `AA`, `AB`, ...
fn row_letters(row: u16) -> String {
    let mut n = u32::from(row) + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

impl Display for WellKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for WellKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidWellKey(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        let row = row.parse().map_err(|_| invalid())?;
        let col = col.parse().map_err(|_| invalid())?;
        let key = Self::new(row, col);
        // only the canonical form: no signs, no leading zeros
        if key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Serialize for WellKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WellKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Concentration recorded at paint time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Concentration {
    /// Free-form amount as typed (`"50"`, `"0.5"`, `"1e-3"`)
    pub value: String,
    /// Unit as typed (`"µM"`, `"mg/mL"`)
    pub unit: String,
}

impl Concentration {
    /// Create a concentration
    #[must_use]
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl Display for Concentration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Contents of a painted well
///
/// Only painted wells have a `WellData`; an absent entry means "empty".
/// `value` and `unit` travel together: both are `null` on the wire or both
/// are set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WellDataRepr", into = "WellDataRepr")]
pub struct WellData {
    /// Reagent painted into the well (may no longer exist)
    pub reagent_id: ReagentId,
    /// Concentration, when tracking was enabled at paint time
    pub concentration: Option<Concentration>,
}

impl WellData {
    /// Create well data
    #[must_use]
    pub fn new(reagent_id: ReagentId, concentration: Option<Concentration>) -> Self {
        Self {
            reagent_id,
            concentration,
        }
    }

    /// Concentration amount, if tracked
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.concentration.as_ref().map(|c| c.value.as_str())
    }

    /// Concentration unit, if tracked
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.concentration.as_ref().map(|c| c.unit.as_str())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WellDataRepr {
    reagent_id: ReagentId,
    value: Option<String>,
    unit: Option<String>,
}

impl TryFrom<WellDataRepr> for WellData {
    type Error = ModelError;

    fn try_from(repr: WellDataRepr) -> Result<Self, Self::Error> {
        let concentration = match (repr.value, repr.unit) {
            (Some(value), Some(unit)) => Some(Concentration { value, unit }),
            (None, None) => None,
            _ => return Err(ModelError::IncompleteConcentration),
        };
        Ok(Self::new(repr.reagent_id, concentration))
    }
}

impl From<WellData> for WellDataRepr {
    fn from(data: WellData) -> Self {
        let (value, unit) = match data.concentration {
            Some(c) => (Some(c.value), Some(c.unit)),
            None => (None, None),
        };
        Self {
            reagent_id: data.reagent_id,
            value,
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn labels() {
        assert_eq!(WellKey::new(0, 0).label(), "A1");
        assert_eq!(WellKey::new(7, 11).label(), "H12");
        assert_eq!(WellKey::new(15, 23).label(), "P24");
        assert_eq!(WellKey::new(26, 0).label(), "AA1");
    }

    #[test]
    fn text_form_has_no_collisions_past_ten_columns() {
        // "1-11" and "11-1" must stay distinct
        let a: WellKey = "1-11".parse().unwrap();
        let b: WellKey = "11-1".parse().unwrap();
        assert_ne!(a, b);
        assert_eq!(a, WellKey::new(1, 11));
        assert!("1".parse::<WellKey>().is_err());
        assert!("a-1".parse::<WellKey>().is_err());
        assert!("-1-2".parse::<WellKey>().is_err());
    }

    #[test]
    fn non_canonical_text_is_rejected() {
        for text in ["+1-+2", "01-02", "1-02", " 1-2", "1-2 "] {
            assert!(
                matches!(text.parse::<WellKey>(), Err(ModelError::InvalidWellKey(_))),
                "{text}"
            );
        }
        assert_eq!("0-0".parse::<WellKey>().unwrap(), WellKey::new(0, 0));
        assert!(serde_json::from_str::<WellKey>("\"01-2\"").is_err());
    }

    #[test]
    fn bounds_follow_registry() {
        assert!(WellKey::new(7, 11).fits(PlateSize::Wells96));
        assert!(!WellKey::new(8, 0).fits(PlateSize::Wells96));
        assert!(!WellKey::new(0, 12).fits(PlateSize::Wells96));
        assert!(matches!(
            WellKey::new(2, 0).check(PlateSize::Wells6),
            Err(ModelError::OutOfBounds { .. })
        ));
        assert!(WellKey::new(15, 23).fits(PlateSize::Wells384));
    }

    #[test]
    fn well_data_wire_form() {
        let data = WellData::new(ReagentId::new("r1"), Some(Concentration::new("50", "µM")));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "reagentId": "r1", "value": "50", "unit": "µM" })
        );

        let bare = WellData::new(ReagentId::new("r1"), None);
        let json = serde_json::to_value(&bare).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "reagentId": "r1", "value": null, "unit": null })
        );
    }

    #[test]
    fn half_set_concentration_is_rejected() {
        let json = r#"{ "reagentId": "r1", "value": "50", "unit": null }"#;
        assert!(serde_json::from_str::<WellData>(json).is_err());
    }

    proptest! {
        #[test]
        fn key_text_form_parses_back(row in 0u16..64, col in 0u16..64) {
            let key = WellKey::new(row, col);
            prop_assert_eq!(key.to_string().parse::<WellKey>().unwrap(), key);
        }
    }
}
