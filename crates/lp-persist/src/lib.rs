//! Lab Plate Persistence
//!
//! Mirrors application state into a string-keyed key-value store.
//!
//! # Core Concepts
//!
//! - [`KeyValueStore`]: Durable string storage (`get` / `set` / `remove`)
//! - [`MemoryStore`]: In-process store for tests and ephemeral sessions
//! - [`FileStore`]: One file per key in a directory, written atomically
//! - [`StorageKeys`]: Key names (`lp_reagents`, `lp_plates`, `lp_dark`, `lp_activePlateId`)
//! - [`Persistence`]: Loads each key with per-key fallback and writes through
//!   whatever a [`lp_state::ChangeSet`] names
//!
//! Values are JSON, except the active plate id which is stored as a plain
//! string. Keys are independent: there is no cross-key transaction.

#![warn(unreachable_pub)]

mod adapter;
mod error;
mod file;
mod keys;
mod kv;

pub use adapter::{Loaded, Persistence};
pub use error::StorageError;
pub use file::FileStore;
pub use keys::StorageKeys;
pub use kv::{KeyValueStore, MemoryStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
