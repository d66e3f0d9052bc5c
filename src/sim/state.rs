//! Game state and core simulation types
//!
//! The player buffers a requested heading and commits it only once the path
//! in that direction is free, which gives corner-turn input buffering. Ghosts
//! re-roll their heading on a countdown and bounce off walls between
//! scheduled turns. Both movement paths uphold the same guarantee: an
//! entity's rect never overlaps a wall after `update` returns.

use std::collections::BTreeSet;

use glam::IVec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{Rect, blocked};
use super::level::Level;
use crate::consts::{GHOST_SPEED, GHOST_TURN_COOLDOWN, PLAYER_SPEED, TILE_SIZE};
use crate::world_to_tile;

/// The four cardinal input directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// All four cardinals, in a fixed order
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// Unit direction vector (y grows downward)
    pub const fn vector(self) -> IVec2 {
        match self {
            Dir::Up => IVec2::new(0, -1),
            Dir::Down => IVec2::new(0, 1),
            Dir::Left => IVec2::new(-1, 0),
            Dir::Right => IVec2::new(1, 0),
        }
    }
}

/// The player-controlled entity
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Heading currently in effect; zero until a first free turn commits
    pub direction: IVec2,
    /// Requested heading, committed once it is immediately free
    pub pending: IVec2,
    /// Unit steps per tick
    pub speed: i32,
}

impl Player {
    pub fn new(position: IVec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, TILE_SIZE, TILE_SIZE),
            direction: IVec2::ZERO,
            pending: IVec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    /// Queue a direction change; it takes effect once the path is free
    pub fn set_direction(&mut self, dir: Dir) {
        self.pending = dir.vector();
    }

    /// True iff the whole displacement stays clear of walls. A zero
    /// displacement never counts as movable.
    fn can_move(&self, delta: IVec2, walls: &[Rect]) -> bool {
        if delta == IVec2::ZERO {
            return false;
        }
        !blocked(&self.rect.translated(delta), walls)
    }

    /// Advance one tick against the wall set
    pub fn update(&mut self, walls: &[Rect]) {
        if self.can_move(self.pending * self.speed, walls) {
            self.direction = self.pending;
        }
        if !self.can_move(self.direction * self.speed, walls) {
            return;
        }
        self.advance(walls);
    }

    /// Move in unit steps along the single axis of the heading, stopping
    /// silently at the first step that would clip a wall.
    fn advance(&mut self, walls: &[Rect]) {
        let step = if self.direction.x != 0 {
            IVec2::new(self.direction.x.signum(), 0)
        } else if self.direction.y != 0 {
            IVec2::new(0, self.direction.y.signum())
        } else {
            return;
        };

        for _ in 0..self.speed {
            let next = self.rect.translated(step);
            if blocked(&next, walls) {
                return;
            }
            self.rect = next;
        }
    }
}

/// An autonomous pursuer
#[derive(Debug, Clone)]
pub struct Ghost {
    pub rect: Rect,
    /// Current heading, always a single cardinal axis
    pub direction: IVec2,
    /// Unit steps per tick
    pub speed: i32,
    /// Ticks until the next scheduled turn decision
    pub turn_cooldown: u32,
}

impl Ghost {
    pub fn new(position: IVec2, rng: &mut impl Rng) -> Self {
        let direction = Dir::ALL[rng.random_range(0..Dir::ALL.len())].vector();
        Self {
            rect: Rect::new(position.x, position.y, TILE_SIZE, TILE_SIZE),
            direction,
            speed: GHOST_SPEED,
            turn_cooldown: GHOST_TURN_COOLDOWN,
        }
    }

    /// Advance one tick: maybe re-roll the heading, then move with bounce
    pub fn update(&mut self, walls: &[Rect], rng: &mut impl Rng) {
        if self.turn_cooldown == 0 {
            self.choose_new_direction(walls, rng);
            self.turn_cooldown = GHOST_TURN_COOLDOWN;
        } else {
            self.turn_cooldown -= 1;
        }

        // Unlike the player there is no partial advance: the first blocked
        // step reverses the heading and ends the move for this tick.
        for _ in 0..self.speed {
            let next = self.rect.translated(self.direction);
            if blocked(&next, walls) {
                self.direction = -self.direction;
                return;
            }
            self.rect = next;
        }
    }

    /// Pick the first of the shuffled cardinals whose full-tile projection
    /// is clear of walls; keep the current heading when boxed in.
    fn choose_new_direction(&mut self, walls: &[Rect], rng: &mut impl Rng) {
        let mut candidates = Dir::ALL;
        candidates.shuffle(rng);
        for dir in candidates {
            let probe = self.rect.translated(dir.vector() * TILE_SIZE);
            if !blocked(&probe, walls) {
                self.direction = dir.vector();
                return;
            }
        }
    }
}

/// Round result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    /// Round in progress
    Ongoing,
    /// All pellets collected
    Won,
    /// A ghost reached the player
    Lost,
}

impl RoundOutcome {
    /// Won or Lost; terminal outcomes freeze the simulation
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Ticks simulated so far; stops counting once terminal
    pub time_ticks: u64,
    pub score: u32,
    pub outcome: RoundOutcome,
    /// Wall geometry, immutable after load
    pub walls: Vec<Rect>,
    /// Remaining pellet tiles
    pub pellets: BTreeSet<(i32, i32)>,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
}

impl GameState {
    /// Build a fresh round from a parsed level and a run seed
    pub fn new(level: &Level, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ghosts = level
            .ghost_spawns
            .iter()
            .map(|&pos| Ghost::new(pos, &mut rng))
            .collect();

        Self {
            seed,
            rng,
            time_ticks: 0,
            score: 0,
            outcome: RoundOutcome::Ongoing,
            walls: level.walls.clone(),
            pellets: level.pellets.clone(),
            player: Player::new(level.player_spawn),
            ghosts,
        }
    }

    /// Tile containing the player's rect center
    pub fn player_tile(&self) -> IVec2 {
        world_to_tile(self.player.rect.center())
    }

    /// Read-only copy handed to the presentation layer once per tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            walls: self.walls.clone(),
            pellets: self.pellets.iter().copied().collect(),
            player: self.player.rect,
            ghosts: self.ghosts.iter().map(|g| g.rect).collect(),
            score: self.score,
            outcome: self.outcome,
        }
    }
}

/// Immutable per-tick view for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub walls: Vec<Rect>,
    pub pellets: Vec<(i32, i32)>,
    pub player: Rect,
    pub ghosts: Vec<Rect>,
    pub score: u32,
    pub outcome: RoundOutcome,
}
