//! Lab Plate Model
//!
//! Typed data model for multi-well plate layouts.
//!
//! # Core Concepts
//!
//! - [`PlateSize`]: The six supported well counts and their grid geometry
//! - [`Reagent`]: A named, colored substance that can be painted into wells
//! - [`Plate`]: A named plate owning a sparse map of painted wells
//! - [`WellKey`]: Zero-based `(row, col)` address of a single well
//! - [`WellData`]: What a painted well holds (reagent reference + optional concentration)
//! - [`IdGenerator`]: Source of unique opaque ids for reagents and plates
//!
//! # Example
//!
//! ```rust,ignore
//! use lp_model::{Plate, PlateId, PlateSize, WellData, WellKey};
//!
//! let mut plate = Plate::new(PlateId::new("p1"), "Plate 1", PlateSize::Wells96);
//! plate.set_well(WellKey::new(0, 0), WellData::new(reagent_id, None))?;
//! assert_eq!(plate.filled_count(), 1);
//! ```

#![warn(unreachable_pub)]

mod color;
mod error;
mod ids;
mod plate;
mod reagent;
mod size;
mod well;

pub use color::{HexColor, TextColor};
pub use error::ModelError;
pub use ids::{IdGenerator, PlateId, ReagentId, SequentialIds, UuidGenerator};
pub use plate::Plate;
pub use reagent::Reagent;
pub use size::{PlateSize, SizeConfig};
pub use well::{Concentration, WellData, WellKey};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
