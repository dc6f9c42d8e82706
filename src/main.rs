//! Terminal runner (default binary).
//!
//! Drives the game from a fixed frame schedule: key events that arrive
//! between frames are applied in order, then each frame runs the gravity
//! check and redraws.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use blockfall::config::GameConfig;
use blockfall::input::{ActionBuffer, KeyOutcome};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    // stderr would scribble over the alternate screen, so log to a file or not at all.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut state = config.build_state();
    let view = GameView::default();
    let mut actions = ActionBuffer::new();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = config.frame_duration();
    let start = Instant::now();
    let mut next_frame = start;

    info!(
        "starting {}x{} arena, drop interval {}ms, solid floor {}",
        state.arena().width(),
        state.arena().height(),
        state.drop_interval(),
        state.arena().solid_floor()
    );

    loop {
        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if actions.feed(key) == KeyOutcome::Quit {
                        info!("quit after {} pieces landed", state.landed_count());
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        for action in actions.drain() {
            state.apply_action(action);
        }

        // Frame: gravity, then render.
        let now_ms = whole_millis(start.elapsed());
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        let (cols, rows) = (state.arena().width(), state.arena().height());
        let mut canvas = view.canvas(&mut fb, cols, rows);
        state.frame(now_ms, &mut canvas);
        term.draw_swap(&mut fb)?;

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind; schedule from now instead of bursting.
            next_frame = now + frame;
        }
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
