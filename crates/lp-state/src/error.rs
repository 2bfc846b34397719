//! Error types for state mutation

use lp_model::{ModelError, PlateId};

/// State-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Model rule violated (bounds, duplicate ids, ...)
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// At least one plate must always exist
    #[error("plate list is empty")]
    NoPlates,

    /// Refused: removing the only remaining plate
    #[error("cannot remove the last plate {0}")]
    LastPlate(PlateId),

    /// No plate with this id
    #[error("unknown plate: {0}")]
    UnknownPlate(PlateId),
}
