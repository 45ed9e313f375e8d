//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod entity;
pub mod pipes;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use body::Body;
pub use entity::{Entity, EntityKind, advance};
pub use pipes::{pair_at, spawn_pair};
pub use scheduler::Scheduler;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
