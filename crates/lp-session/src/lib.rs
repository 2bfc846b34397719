//! Lab Plate Session
//!
//! The entry point a UI drives: one [`Session`] owns the application state,
//! routes destructive edits through a confirmation gate and writes every
//! committed change through to storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use lp_persist::FileStore;
//! use lp_session::{Session, SessionConfig, EditOutcome};
//! use lp_model::PlateSize;
//!
//! let mut session = Session::open(FileStore::new("./state"), SessionConfig::default());
//!
//! let plate = session.create_plate("", PlateSize::Wells24)?;
//! session.paint(0, 0)?;
//!
//! if let EditOutcome::NeedsConfirmation(token) =
//!     session.edit_plate(&plate, "Plate 2", PlateSize::Wells48)?
//! {
//!     session.confirm(token);
//! }
//! ```

#![warn(unreachable_pub)]

mod config;
mod error;
mod session;

pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use session::{DeleteOutcome, EditOutcome, PendingAction, Resolution, Session};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a session
    pub use crate::{DeleteOutcome, EditOutcome, PendingAction, Resolution, Session, SessionConfig};
    pub use lp_model::{HexColor, PlateId, PlateSize, ReagentId, WellKey};
    pub use lp_persist::{FileStore, MemoryStore};
    pub use lp_state::{FillSettings, ReagentField, Tool, WellAppearance};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
