//! Maze Chase - a tile-grid arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level, collision, entities, round state)
//! - `renderer`: Terminal presentation (crossterm)
//! - `platform`: Clock and frame-pacing abstraction
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Edge length of one maze tile in world units
    pub const TILE_SIZE: i32 = 24;
    /// Player movement in unit steps per tick
    pub const PLAYER_SPEED: i32 = 2;
    /// Ghost movement in unit steps per tick
    pub const GHOST_SPEED: i32 = 2;
    /// Ticks between scheduled ghost turn decisions
    pub const GHOST_TURN_COOLDOWN: u32 = 30;
    /// Fixed simulation rate in ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Points awarded per pellet
    pub const PELLET_SCORE: u32 = 10;
}

/// Convert a tile coordinate to its world-space origin
#[inline]
pub fn tile_to_world(tile: IVec2) -> IVec2 {
    tile * consts::TILE_SIZE
}

/// Tile containing a world-space point
#[inline]
pub fn world_to_tile(point: IVec2) -> IVec2 {
    IVec2::new(
        point.x.div_euclid(consts::TILE_SIZE),
        point.y.div_euclid(consts::TILE_SIZE),
    )
}
