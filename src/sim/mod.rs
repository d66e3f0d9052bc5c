//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (ghosts by spawn order, pellets by tile order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Rect, blocked};
pub use level::{DEFAULT_LAYOUT, Level, LevelError};
pub use state::{Dir, GameState, Ghost, Player, RoundOutcome, Snapshot};
pub use tick::{TickInput, tick};
