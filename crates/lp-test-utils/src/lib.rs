//! Testing utilities for the lab plate workspace
//!
//! Deterministic sessions, store fixtures and tracing setup.

#![allow(missing_docs)]

use lp_model::{HexColor, Plate, PlateId, PlateSize, Reagent, ReagentId, SequentialIds};
use lp_persist::{KeyValueStore, MemoryStore};
use lp_session::{Session, SessionConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

pub const SEED: u64 = 0x5eed;

/// Install a fmt subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Session over `store` with sequential ids and a fixed color seed
pub fn open_session<S: KeyValueStore>(store: S, config: SessionConfig) -> Session<S> {
    Session::open_with(
        store,
        config,
        Box::new(SequentialIds::new("t")),
        StdRng::seed_from_u64(SEED),
    )
}

/// Fresh seeded session over an empty memory store
pub fn test_session() -> Session<MemoryStore> {
    open_session(MemoryStore::new(), SessionConfig::default())
}

/// Close `session` and open a new one over the same store
///
/// Ids restart from a different prefix so they cannot collide with the
/// first session's.
pub fn reopen<S: KeyValueStore>(session: Session<S>, config: SessionConfig) -> Session<S> {
    let store = session.into_store();
    Session::open_with(
        store,
        config,
        Box::new(SequentialIds::new("r")),
        StdRng::seed_from_u64(SEED + 1),
    )
}

pub fn reagent(id: &str, name: &str, hex: &str) -> Reagent {
    Reagent::new(ReagentId::new(id), name, hex.parse::<HexColor>().unwrap())
}

pub fn plate(id: &str, name: &str, size: PlateSize) -> Plate {
    Plate::new(PlateId::new(id), name, size)
}
