//! Well painter
//!
//! Applies the active tool to a single well and resolves how wells render.

use crate::reagents::ReagentStore;
use lp_model::{Concentration, HexColor, ModelError, Plate, Reagent, ReagentId, TextColor, WellData, WellKey};
use std::fmt::{self, Display, Formatter};

/// Active paint tool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Clears wells
    Eraser,
    /// Paints wells with this reagent
    Reagent(ReagentId),
}

impl Tool {
    /// Tool token: `"eraser"` or the reagent id
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Tool::Eraser => "eraser",
            Tool::Reagent(id) => id.as_str(),
        }
    }

    /// Check if this is the eraser
    #[inline]
    #[must_use]
    pub fn is_eraser(&self) -> bool {
        matches!(self, Tool::Eraser)
    }

    /// Check if this tool paints `id`
    #[inline]
    #[must_use]
    pub fn is_reagent(&self, id: &ReagentId) -> bool {
        matches!(self, Tool::Reagent(r) if r == id)
    }
}

impl Display for Tool {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Concentration settings applied at paint time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillSettings {
    /// Record a concentration on painted wells
    pub enabled: bool,
    /// Amount as typed
    pub value: String,
    /// Unit as typed
    pub unit: String,
}

impl FillSettings {
    /// Tracking disabled, with a preset unit for when it gets enabled
    #[must_use]
    pub fn disabled(unit: impl Into<String>) -> Self {
        Self {
            enabled: false,
            value: String::new(),
            unit: unit.into(),
        }
    }

    /// Tracking enabled with `value` and `unit`
    #[must_use]
    pub fn enabled(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// Concentration to store, or `None` when tracking is off
    #[must_use]
    pub fn concentration(&self) -> Option<Concentration> {
        self.enabled
            .then(|| Concentration::new(self.value.clone(), self.unit.clone()))
    }
}

impl Default for FillSettings {
    fn default() -> Self {
        Self::disabled("µM")
    }
}

/// Result of painting one well
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Well now holds the active reagent; `previous` was overwritten
    Filled {
        /// Prior contents, if any
        previous: Option<WellData>,
    },
    /// Eraser removed these contents
    Erased(WellData),
    /// Eraser on an empty well
    AlreadyEmpty,
}

impl PaintOutcome {
    /// Whether the well map changed
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, PaintOutcome::AlreadyEmpty)
    }
}

/// Apply `tool` to one well of `plate`
///
/// Painting overwrites unconditionally (last paint wins). Erasing an empty
/// well is a no-op. Only `plate` is touched.
///
/// # Errors
/// Returns [`ModelError::OutOfBounds`] if `key` does not fit the plate
pub fn paint_well(
    plate: &mut Plate,
    key: WellKey,
    tool: &Tool,
    fill: &FillSettings,
) -> Result<PaintOutcome, ModelError> {
    let key = key.check(plate.size())?;
    match tool {
        Tool::Eraser => Ok(plate
            .clear_well(key)
            .map_or(PaintOutcome::AlreadyEmpty, PaintOutcome::Erased)),
        Tool::Reagent(id) => {
            let data = WellData::new(id.clone(), fill.concentration());
            let previous = plate.set_well(key, data)?;
            Ok(PaintOutcome::Filled { previous })
        }
    }
}

/// How a well renders
#[derive(Debug, Clone, PartialEq)]
pub enum WellAppearance<'a> {
    /// Empty style: no data, or data whose reagent no longer exists
    Empty,
    /// Filled with a live reagent
    Filled {
        /// Reagent the well resolves to
        reagent: &'a Reagent,
        /// Background color
        fill: HexColor,
        /// Readable text color on `fill`
        text: TextColor,
        /// `"50 µM"` when a concentration was recorded
        caption: Option<String>,
    },
}

impl WellAppearance<'_> {
    /// Check if the well renders as empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, WellAppearance::Empty)
    }
}

/// Resolve the appearance of a well
///
/// Orphaned wells (reagent deleted) render as [`WellAppearance::Empty`]
/// while their stored data stays as is.
#[must_use]
pub fn well_appearance<'a>(well: Option<&WellData>, reagents: &'a ReagentStore) -> WellAppearance<'a> {
    let Some(data) = well else {
        return WellAppearance::Empty;
    };
    let Some(reagent) = reagents.get(&data.reagent_id) else {
        return WellAppearance::Empty;
    };
    WellAppearance::Filled {
        reagent,
        fill: reagent.color,
        text: reagent.color.contrasting_text(),
        caption: data.concentration.as_ref().map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_model::{PlateId, PlateSize};
    use proptest::prelude::*;

    fn plate() -> Plate {
        Plate::new(PlateId::new("p1"), "Plate 1", PlateSize::Wells96)
    }

    fn tool(id: &str) -> Tool {
        Tool::Reagent(ReagentId::new(id))
    }

    #[test]
    fn fill_settings_gate_concentration() {
        let mut p = plate();
        let fill = FillSettings::enabled("50", "µM");
        paint_well(&mut p, WellKey::new(0, 0), &tool("a"), &fill).unwrap();
        assert_eq!(p.well(WellKey::new(0, 0)).unwrap().value(), Some("50"));

        let fill = FillSettings { enabled: false, ..fill };
        paint_well(&mut p, WellKey::new(0, 1), &tool("a"), &fill).unwrap();
        let w = p.well(WellKey::new(0, 1)).unwrap();
        assert_eq!(w.value(), None);
        assert_eq!(w.unit(), None);
    }

    #[test]
    fn last_paint_wins() {
        let mut p = plate();
        let key = WellKey::new(3, 4);
        let fill = FillSettings::enabled("1", "mM");
        paint_well(&mut p, key, &tool("a"), &fill).unwrap();
        let outcome = paint_well(&mut p, key, &tool("b"), &FillSettings::default()).unwrap();

        assert!(matches!(outcome, PaintOutcome::Filled { previous: Some(ref prev) } if prev.reagent_id.as_str() == "a"));
        assert_eq!(p.filled_count(), 1);
        assert_eq!(p.well(key), Some(&WellData::new(ReagentId::new("b"), None)));
    }

    #[test]
    fn erasing_empty_well_is_noop() {
        let mut p = plate();
        let outcome = paint_well(&mut p, WellKey::new(0, 0), &Tool::Eraser, &FillSettings::default()).unwrap();
        assert_eq!(outcome, PaintOutcome::AlreadyEmpty);
        assert!(!outcome.changed());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut p = plate();
        let result = paint_well(&mut p, WellKey::new(8, 0), &tool("a"), &FillSettings::default());
        assert!(result.is_err());
        assert_eq!(p.filled_count(), 0);
    }

    #[test]
    fn appearance_resolution() {
        let reagents = ReagentStore::new(vec![
            Reagent::new(ReagentId::new("dark"), "Dark", HexColor::from_rgb(0x1e, 0x3a, 0x8a)),
            Reagent::new(ReagentId::new("light"), "Light", HexColor::from_rgb(0xfd, 0xe6, 0x8a)),
        ])
        .unwrap();

        assert!(well_appearance(None, &reagents).is_empty());

        let orphan = WellData::new(ReagentId::new("gone"), Some(Concentration::new("5", "nM")));
        assert!(well_appearance(Some(&orphan), &reagents).is_empty());

        let dark = WellData::new(ReagentId::new("dark"), Some(Concentration::new("50", "µM")));
        match well_appearance(Some(&dark), &reagents) {
            WellAppearance::Filled { text, caption, .. } => {
                assert_eq!(text, TextColor::White);
                assert_eq!(caption.as_deref(), Some("50 µM"));
            }
            WellAppearance::Empty => panic!("expected filled"),
        }

        let light = WellData::new(ReagentId::new("light"), None);
        match well_appearance(Some(&light), &reagents) {
            WellAppearance::Filled { text, caption, .. } => {
                assert_eq!(text, TextColor::Black);
                assert_eq!(caption, None);
            }
            WellAppearance::Empty => panic!("expected filled"),
        }
    }

    proptest! {
        #[test]
        fn paint_then_erase_round_trips_to_empty(row in 0u16..8, col in 0u16..12, enabled: bool) {
            let mut p = plate();
            let key = WellKey::new(row, col);
            let fill = FillSettings { enabled, ..FillSettings::enabled("10", "µM") };

            paint_well(&mut p, key, &tool("x"), &fill).unwrap();
            prop_assert!(p.well(key).is_some());

            paint_well(&mut p, key, &Tool::Eraser, &fill).unwrap();
            prop_assert!(p.well(key).is_none());
            let text = format!("{row}-{col}");
            let present = p.wells().keys().any(|k| k.to_string() == text);
            prop_assert!(!present);
        }
    }
}
