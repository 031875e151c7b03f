//! Terminal runner (default binary).
//!
//! Thin glue: parses board dimensions, owns the frame clock and keyboard
//! polling, and feeds intents and elapsed time into the core.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use bitfall::core::{GameState, GridConfig};
use bitfall::input::{should_quit, InputHandler};
use bitfall::term::{GameView, TerminalRenderer, Viewport};
use bitfall::types::{MAX_PLAYABLE, MIN_PLAYABLE, TICK_MS};

fn main() -> Result<()> {
    let config = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// `bitfall [width height]`, both in the supported playable range.
fn parse_args() -> Result<GridConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(GridConfig::default()),
        [w, h] => {
            let usage = format!(
                "usage: bitfall [width height], each in [{MIN_PLAYABLE}, {MAX_PLAYABLE}]"
            );
            let width: u8 = w.parse().with_context(|| usage.clone())?;
            let height: u8 = h.parse().with_context(|| usage.clone())?;
            GridConfig::new(width, height).context(usage)
        }
        _ => bail!("usage: bitfall [width height], each in [{MIN_PLAYABLE}, {MAX_PLAYABLE}]"),
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GridConfig) -> Result<()> {
    let mut game_state = GameState::new(config, wall_clock_seed());
    let view = GameView::default();
    let mut input_handler = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            game_state.apply_action(action);
                        }
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick. Credit the measured frame time, not the nominal one, so a
        // slow frame does not slow the game clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            input_handler.update();
            game_state.set_soft_drop(input_handler.soft_drop_held());
            game_state.tick(elapsed.as_millis() as u32);
        }
    }
}
