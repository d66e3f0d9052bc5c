//! Maze Chase entry point
//!
//! Parses the CLI, sets up the terminal, and runs the fixed-rate game loop:
//! sample input, advance the simulation one tick, draw, then block until the
//! next tick boundary. Quit is checked once per frame.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use maze_chase::Settings;
use maze_chase::platform::{FramePacer, SystemClock};
use maze_chase::renderer::{Renderer, TerminalGuard};
use maze_chase::sim::{self, Dir, GameState, Level, TickInput};

#[derive(Debug, Parser)]
#[command(name = "maze-chase", version, about = "Tile-grid maze chase for the terminal")]
struct Args {
    /// Level layout file; the built-in maze is used when omitted
    #[arg(long)]
    level: Option<PathBuf>,
    /// Run seed; derived from the wall clock when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref());

    let layout = match &args.level {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading level {}", path.display()))?,
        None => sim::DEFAULT_LAYOUT.to_string(),
    };
    let level = Level::parse(&layout).context("parsing level layout")?;

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    log::info!(
        "Starting round: seed {seed}, {}x{} tiles, {} pellets, {} ghosts",
        level.width,
        level.height,
        level.pellets.len(),
        level.ghost_spawns.len()
    );

    let mut state = GameState::new(&level, seed);
    let guard = TerminalGuard::enter().context("entering raw terminal mode")?;
    let result = run(&mut state, &level, &settings);
    drop(guard);

    log::info!("Final score {} ({:?})", state.score, state.outcome);
    result.map_err(Into::into)
}

/// Seed for runs that did not pass `--seed`
fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// The fixed-rate frame loop; returns on the quit intent
fn run(state: &mut GameState, level: &Level, settings: &Settings) -> io::Result<()> {
    let mut renderer = Renderer::new(level, settings.color);
    let mut pacer = FramePacer::new(SystemClock, settings.tick_rate);
    let mut stdout = io::stdout();

    loop {
        let mut input = TickInput::default();
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        quit = true;
                    }
                    KeyCode::Up | KeyCode::Char('w') => input.turn = Some(Dir::Up),
                    KeyCode::Down | KeyCode::Char('s') => input.turn = Some(Dir::Down),
                    KeyCode::Left | KeyCode::Char('a') => input.turn = Some(Dir::Left),
                    KeyCode::Right | KeyCode::Char('d') => input.turn = Some(Dir::Right),
                    _ => {}
                }
            }
        }
        if quit {
            return Ok(());
        }

        sim::tick(state, &input);
        renderer.draw(&mut stdout, &state.snapshot())?;
        pacer.wait();
    }
}
