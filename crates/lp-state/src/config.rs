//! Layout configuration

use lp_model::{HexColor, PlateSize};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Preset palette new reagents draw their color from
const DEFAULT_PALETTE: [HexColor; 10] = [
    HexColor::from_rgb(0x3b, 0x82, 0xf6), // blue
    HexColor::from_rgb(0xef, 0x44, 0x44), // red
    HexColor::from_rgb(0x10, 0xb9, 0x81), // green
    HexColor::from_rgb(0xf5, 0x9e, 0x0b), // amber
    HexColor::from_rgb(0x8b, 0x5c, 0xf6), // violet
    HexColor::from_rgb(0xec, 0x48, 0x99), // pink
    HexColor::from_rgb(0x06, 0xb6, 0xd4), // cyan
    HexColor::from_rgb(0x84, 0xcc, 0x16), // lime
    HexColor::from_rgb(0xf9, 0x73, 0x16), // orange
    HexColor::from_rgb(0x64, 0x74, 0x8b), // slate
];

/// Layout and naming defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Colors a new reagent is drawn from (uniformly)
    pub palette: Vec<HexColor>,
    /// Name given to a freshly added reagent
    pub reagent_placeholder: String,
    /// Prefix of generated plate names (`"Plate"` -> `"Plate 2"`)
    pub plate_name_prefix: String,
    /// Layout preselected for new plates
    pub default_plate_size: PlateSize,
    /// Unit preset in the fill settings
    pub default_fill_unit: String,
}

impl LayoutConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom palette
    #[inline]
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<HexColor>) -> Self {
        self.palette = palette;
        self
    }

    /// With a custom reagent placeholder name
    #[inline]
    #[must_use]
    pub fn with_reagent_placeholder(mut self, name: impl Into<String>) -> Self {
        self.reagent_placeholder = name.into();
        self
    }

    /// With a different default plate size
    #[inline]
    #[must_use]
    pub fn with_default_plate_size(mut self, size: PlateSize) -> Self {
        self.default_plate_size = size;
        self
    }

    /// Draw a palette color uniformly at random
    ///
    /// An empty configured palette falls back to the built-in one.
    pub fn pick_color<R: Rng>(&self, rng: &mut R) -> HexColor {
        let palette: &[HexColor] = if self.palette.is_empty() {
            &DEFAULT_PALETTE
        } else {
            &self.palette
        };
        palette[rng.random_range(0..palette.len())]
    }

    /// Generated name for the plate at 1-based `position`
    #[must_use]
    pub fn plate_name(&self, position: usize) -> String {
        format!("{} {position}", self.plate_name_prefix)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            reagent_placeholder: "New Reagent".to_string(),
            plate_name_prefix: "Plate".to_string(),
            default_plate_size: PlateSize::Wells96,
            default_fill_unit: "µM".to_string(),
        }
    }
}
