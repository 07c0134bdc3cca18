//! Terminal maze snake runner (default binary).
//!
//! Polls crossterm for input, advances the game on its own tick delay and
//! redraws through the framebuffer renderer every frame.

use std::env;
use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use crossterm::event::{self, Event};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use maze_snake::core::GameState;
use maze_snake::input::InputHandler;
use maze_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use maze_snake::types::{GameConfig, FRAME_MS};

/// Log file path; no logger is installed when unset.
const LOG_ENV: &str = "MAZE_SNAKE_LOG";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::default();
    ensure!(config.is_valid(), "grid too small for the maze: {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config, clock_seed());
    info!("session seed {}", game.seed());
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        // Block for at most one frame, then drain whatever else is queued.
        let mut timeout = frame;
        while event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            input.handle_event(&ev);
            timeout = Duration::ZERO;
        }

        if input.quit_requested() {
            info!(
                "quit during game {} with length {}",
                game.episode_id(),
                game.snake().len()
            );
            return Ok(());
        }

        for action in input.take_actions() {
            game.apply_action(action);
        }

        game.update(start.elapsed().as_millis() as u64);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
