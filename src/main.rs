//! Terminal maze-crawler runner (default binary).
//!
//! One pass per tick: render the current pose, present, poll input with a
//! timeout until the next tick, then apply at most one directional command.
//! Frames advance whether or not a key is pressed; `dt` is the fixed tick
//! interval, so simulation speed never depends on how long a frame took.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::core::GameState;
use tui_maze::engine::RaycastConfig;
use tui_maze::input::{map_key_event, should_quit, InputHandler};
use tui_maze::term::{FrameBuffer, MazeView, TerminalRenderer};
use tui_maze::types::{Command, DEFAULT_SKY_SEED, TICK_MS, TICK_SECONDS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));

    let mut game = GameState::new();
    let view = MazeView::new(width, height, RaycastConfig::default(), DEFAULT_SKY_SEED);
    let mut fb = FrameBuffer::new(width, height);
    let mut input = InputHandler::new();
    let mut hud = false;

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // Render. Measured frame time feeds the HUD only.
        let frame_seconds = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        view.render_into(&game, &mut fb);
        if hud {
            let fps = 1.0 / frame_seconds.max(1e-6);
            view.draw_hud(&game, fps, &mut fb);
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Repeat events count as presses: holding a key keeps the
                // latch filled on terminals without key-release reporting.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key_event(key) {
                        Some(Command::ToggleHud) => hud = !hud,
                        Some(command) => input.record(command),
                        None => {}
                    }
                }
            }
        }

        // Tick: at most one directional command per tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(command) = input.take() {
                game.apply(command, TICK_SECONDS);
            }
        }
    }
}
