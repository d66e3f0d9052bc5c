//! Level parsing
//!
//! A level is a block of text rows over a fixed alphabet: `#` wall, `.`
//! pellet, `P` player spawn, `G` ghost spawn (markers are case-insensitive);
//! any other character is bare floor. Rows may differ in length - each row is
//! parsed independently and short rows read as floor.

use std::collections::BTreeSet;

use glam::IVec2;
use thiserror::Error;

use super::collision::Rect;
use crate::consts::TILE_SIZE;
use crate::tile_to_world;

/// The built-in maze used when no level file is supplied
pub const DEFAULT_LAYOUT: &str = "\
###################
#.................#
#.###.#####.###.#.#
#.#.#.....#.#.#.#.#
#.#.#.###.#.#.#.#.#
#.#...#G#...#...#.#
#.###.#.#.#.#.###.#
#.....#.#.#.#.....#
#####.#.#.#.#.#####
#.....#.#.#.#.....#
#.###.#.#.#.#.###.#
#.#...#...#...#.#.#
#.#.#.###P###.#.#.#
#.#.#.#.....#.#.#.#
#.#.#.#.###.#.#.#.#
#.#.#.#.#.#.#.#.#.#
#G..#...#.#...#..G#
#.###.###.###.###.#
#.................#
###################";

/// Failure to turn a layout into a playable level
#[derive(Debug, Error)]
pub enum LevelError {
    /// The layout contained no rows with content
    #[error("level layout is empty")]
    Empty,
    /// No `P` marker and no pellet tile to fall back on
    #[error("level layout has nowhere to place the player")]
    NoPlayerPosition,
}

/// A parsed level: immutable wall geometry plus the initial round contents
#[derive(Debug, Clone)]
pub struct Level {
    /// Maze width in tiles (length of the longest row)
    pub width: i32,
    /// Maze height in tiles (row count)
    pub height: i32,
    /// One tile-sized rect per wall character
    pub walls: Vec<Rect>,
    /// Pellet tiles, ordered so iteration is deterministic
    pub pellets: BTreeSet<(i32, i32)>,
    /// Player spawn in world units
    pub player_spawn: IVec2,
    /// Ghost spawns in world units, in marker order
    pub ghost_spawns: Vec<IVec2>,
}

impl Level {
    /// Parse a textual layout into level geometry.
    ///
    /// Fallbacks: without a `P` marker the first pellet tile (in tile order)
    /// becomes the spawn and is removed from the pellet set; without a `G`
    /// marker a single ghost spawns on top of the player.
    pub fn parse(layout: &str) -> Result<Self, LevelError> {
        let rows: Vec<&str> = layout.lines().collect();
        if rows.iter().all(|row| row.trim().is_empty()) {
            return Err(LevelError::Empty);
        }

        let mut walls = Vec::new();
        let mut pellets = BTreeSet::new();
        let mut player_spawn: Option<IVec2> = None;
        let mut ghost_spawns = Vec::new();
        let mut width = 0usize;

        for (y, row) in rows.iter().enumerate() {
            width = width.max(row.chars().count());
            for (x, ch) in row.chars().enumerate() {
                let tile = IVec2::new(x as i32, y as i32);
                match ch {
                    '#' => walls.push(Rect::tile(tile, TILE_SIZE)),
                    '.' => {
                        pellets.insert((tile.x, tile.y));
                    }
                    'P' | 'p' => player_spawn = Some(tile_to_world(tile)),
                    'G' | 'g' => ghost_spawns.push(tile_to_world(tile)),
                    _ => {}
                }
            }
        }

        let player_spawn = match player_spawn {
            Some(pos) => pos,
            None => {
                let &(x, y) = pellets.iter().next().ok_or(LevelError::NoPlayerPosition)?;
                pellets.remove(&(x, y));
                tile_to_world(IVec2::new(x, y))
            }
        };

        if ghost_spawns.is_empty() {
            ghost_spawns.push(player_spawn);
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            walls,
            pellets,
            player_spawn,
            ghost_spawns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers_and_geometry() {
        let level = Level::parse("###\n#P.\n#g#").unwrap();
        assert_eq!(level.width, 3);
        assert_eq!(level.height, 3);
        assert_eq!(level.walls.len(), 6);
        assert_eq!(level.player_spawn, IVec2::new(TILE_SIZE, TILE_SIZE));
        assert_eq!(level.ghost_spawns, vec![IVec2::new(TILE_SIZE, 2 * TILE_SIZE)]);
        assert!(level.pellets.contains(&(2, 1)));
    }

    #[test]
    fn test_pellets_never_on_walls() {
        let level = Level::parse(DEFAULT_LAYOUT).unwrap();
        let wall_tiles: Vec<(i32, i32)> = level
            .walls
            .iter()
            .map(|w| (w.x / TILE_SIZE, w.y / TILE_SIZE))
            .collect();
        for pellet in &level.pellets {
            assert!(!wall_tiles.contains(pellet));
        }
    }

    #[test]
    fn test_missing_player_marker_consumes_first_pellet() {
        let level = Level::parse("###\n#..\n###").unwrap();
        // Pellets sit at (1,1) and (2,1); tile order picks (1,1) as spawn.
        assert_eq!(level.player_spawn, IVec2::new(TILE_SIZE, TILE_SIZE));
        assert!(!level.pellets.contains(&(1, 1)));
        assert_eq!(level.pellets.len(), 1);
    }

    #[test]
    fn test_player_marker_at_origin_is_honored() {
        let level = Level::parse("P..").unwrap();
        assert_eq!(level.player_spawn, IVec2::ZERO);
        assert_eq!(level.pellets.len(), 2);
    }

    #[test]
    fn test_missing_ghost_marker_spawns_on_player() {
        let level = Level::parse("#####\n#P..#\n#####").unwrap();
        assert_eq!(level.ghost_spawns, vec![level.player_spawn]);
    }

    #[test]
    fn test_ragged_rows_read_as_floor() {
        let level = Level::parse("####\n#P\n####").unwrap();
        assert_eq!(level.width, 4);
        assert_eq!(level.walls.len(), 9);
        assert!(level.pellets.is_empty());
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(matches!(Level::parse(""), Err(LevelError::Empty)));
        assert!(matches!(Level::parse("\n  \n"), Err(LevelError::Empty)));
    }

    #[test]
    fn test_no_player_position_is_rejected() {
        assert!(matches!(
            Level::parse("###\n# #\n###"),
            Err(LevelError::NoPlayerPosition)
        ));
    }

    #[test]
    fn test_default_layout_parses() {
        let level = Level::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(level.width, 19);
        assert_eq!(level.height, 20);
        assert_eq!(level.ghost_spawns.len(), 3);
        assert!(!level.pellets.is_empty());
    }
}
