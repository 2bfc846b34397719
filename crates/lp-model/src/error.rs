//! Error types for the plate model

use crate::size::PlateSize;
use crate::well::WellKey;

/// Model-level errors
///
/// These are programmer errors or malformed input: none of them is reachable
/// through a well-formed user interaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Well count is not one of the supported plate sizes
    #[error("unsupported plate size: {0} wells")]
    UnsupportedSize(u16),

    /// Well coordinates fall outside the plate grid
    #[error("well {key} is outside a {size}-well plate")]
    OutOfBounds {
        /// Offending well
        key: WellKey,
        /// Plate size the well was checked against
        size: PlateSize,
    },

    /// Text is not a `row-col` well key
    #[error("invalid well key: {0:?}")]
    InvalidWellKey(String),

    /// Text is not a `#rgb` / `#rrggbb` color
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    /// Exactly one of `value` and `unit` was set
    #[error("concentration value and unit must be set together")]
    IncompleteConcentration,

    /// Two plates share the same id
    #[error("duplicate plate id: {0}")]
    DuplicatePlateId(String),

    /// Two reagents share the same id
    #[error("duplicate reagent id: {0}")]
    DuplicateReagentId(String),
}
