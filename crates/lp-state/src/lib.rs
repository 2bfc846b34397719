//! Lab Plate State
//!
//! The single owned application state and the components that mutate it.
//!
//! # Core Concepts
//!
//! - [`AppState`]: Reagents, plates, active plate, active tool, fill settings, theme
//! - [`ReagentStore`] / [`PlateStore`]: Ordered collections with id lookup
//! - [`paint_well`]: Applies or clears one well for the active tool
//! - [`well_appearance`]: Resolves how a well renders (color, text color, caption)
//! - [`ConfirmationGate`]: Two-phase propose/resolve for destructive edits
//! - [`ChangeSet`]: Which persisted slices a committed mutation touched
//!
//! Every mutation on [`AppState`] returns a [`ChangeSet`]; callers use it to
//! decide which storage keys to write through.

#![warn(unreachable_pub)]

mod change;
mod config;
mod error;
mod gate;
mod painter;
mod plates;
mod reagents;
mod seed;
mod state;

pub use change::ChangeSet;
pub use config::LayoutConfig;
pub use error::StateError;
pub use gate::{ConfirmationGate, ConfirmationToken, Decision, PendingConfirmation};
pub use painter::{paint_well, well_appearance, FillSettings, PaintOutcome, Tool, WellAppearance};
pub use plates::PlateStore;
pub use reagents::{ReagentField, ReagentStore};
pub use seed::{seed_plates, seed_reagents};
pub use state::AppState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
