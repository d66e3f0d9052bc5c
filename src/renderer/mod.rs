//! Terminal rendering module
//!
//! Draws the maze as a colored cell grid with a HUD line above it, redrawing
//! only cells that changed since the previous frame. Consumes per-tick
//! snapshots; owns no game logic.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use glam::IVec2;

use crate::sim::{Level, RoundOutcome, Snapshot};
use crate::world_to_tile;

/// Terminal columns per maze tile
const CELL_W: u16 = 2;

/// What occupies a tile, for glyph selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Floor,
    Pellet,
    Player,
    Ghost,
}

impl Cell {
    fn glyph(self) -> &'static str {
        match self {
            Cell::Wall => "██",
            Cell::Floor => "  ",
            Cell::Pellet => "· ",
            Cell::Player => "@ ",
            Cell::Ghost => "& ",
        }
    }

    fn color(self) -> Color {
        match self {
            Cell::Wall => Color::DarkBlue,
            Cell::Floor => Color::Reset,
            Cell::Pellet => Color::White,
            Cell::Player => Color::Yellow,
            Cell::Ghost => Color::Red,
        }
    }
}

/// RAII guard for raw mode and the alternate screen; restores the terminal
/// on drop, including during unwinding
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Diff-based cell renderer for one maze
pub struct Renderer {
    width: i32,
    height: i32,
    /// Wall membership per tile, precomputed once (walls are immutable)
    wall_tiles: Vec<bool>,
    /// Last drawn cell per tile; `None` forces a full redraw
    last: Vec<Option<Cell>>,
    last_hud: String,
    color: bool,
}

impl Renderer {
    pub fn new(level: &Level, color: bool) -> Self {
        let size = (level.width * level.height) as usize;
        let mut wall_tiles = vec![false; size];
        for wall in &level.walls {
            let tile = world_to_tile(IVec2::new(wall.x, wall.y));
            wall_tiles[(tile.y * level.width + tile.x) as usize] = true;
        }

        Self {
            width: level.width,
            height: level.height,
            wall_tiles,
            last: vec![None; size],
            last_hud: String::new(),
            color,
        }
    }

    /// Draw one frame from a snapshot
    pub fn draw(&mut self, out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
        self.draw_hud(out, snapshot)?;

        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cell_at(IVec2::new(x, y), snapshot);
                let index = (y * self.width + x) as usize;
                if self.last[index] != Some(cell) {
                    self.last[index] = Some(cell);
                    self.draw_cell(out, x, y, cell)?;
                }
            }
        }

        out.flush()
    }

    fn cell_at(&self, tile: IVec2, snapshot: &Snapshot) -> Cell {
        if world_to_tile(snapshot.player.center()) == tile {
            return Cell::Player;
        }
        if snapshot
            .ghosts
            .iter()
            .any(|ghost| world_to_tile(ghost.center()) == tile)
        {
            return Cell::Ghost;
        }
        if snapshot.pellets.contains(&(tile.x, tile.y)) {
            return Cell::Pellet;
        }
        if self.wall_tiles[(tile.y * self.width + tile.x) as usize] {
            return Cell::Wall;
        }
        Cell::Floor
    }

    fn draw_cell(&self, out: &mut impl Write, x: i32, y: i32, cell: Cell) -> io::Result<()> {
        out.queue(MoveTo(x as u16 * CELL_W, y as u16 + 1))?;
        if self.color {
            out.queue(SetForegroundColor(cell.color()))?;
        }
        out.queue(Print(cell.glyph()))?;
        if self.color {
            out.queue(ResetColor)?;
        }
        Ok(())
    }

    fn draw_hud(&mut self, out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
        let hud = match snapshot.outcome {
            RoundOutcome::Ongoing => {
                format!("Score: {}   arrows/wasd steer, q quits", snapshot.score)
            }
            RoundOutcome::Won => format!("Score: {}   YOU WIN! q quits", snapshot.score),
            RoundOutcome::Lost => format!("Score: {}   GAME OVER - q quits", snapshot.score),
        };
        if hud != self.last_hud {
            out.queue(MoveTo(0, 0))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            self.last_hud = hud;
        }
        Ok(())
    }
}
