//! Terminal match-three runner (default binary).
//!
//! Keyboard cursor selects gems; the confirmed cell is converted to a world
//! point before it reaches the core, so the full input path (world point to
//! cell coordinate) is exercised. Pipeline steps are presented with their
//! configured delays; audio cues are logged.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tui_match::core::{BoardConfig, Phase, StepOutput, TurnController};
use tui_match::input::{handle_key_event, should_quit, CursorAction};
use tui_match::term::{encode_frame, step_delay, TerminalRenderer, ViewState};
use tui_match::types::CellPos;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig {
        seed: wall_clock_seed(),
        ..Default::default()
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: BoardConfig) -> Result<()> {
    let mut game = TurnController::new(config)?;
    game.start();

    let mut cursor = CellPos::new(0, 0);

    loop {
        draw(term, &game, cursor)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        let Some(action) = handle_key_event(key) else {
            continue;
        };
        match action {
            CursorAction::Left => cursor.x = (cursor.x - 1).max(0),
            CursorAction::Right => cursor.x = (cursor.x + 1).min(game.grid().width() - 1),
            CursorAction::Down => cursor.y = (cursor.y - 1).max(0),
            CursorAction::Up => cursor.y = (cursor.y + 1).min(game.grid().height() - 1),
            CursorAction::Confirm => {
                let point = game.grid().world_position(cursor.x, cursor.y);
                let out = game.select_at_world(point);
                present_step(term, &game, cursor, &out)?;

                // Drive the remaining pipeline steps, pausing between them
                // so the board change reads as an animation.
                while game.is_resolving() {
                    let out = game.advance();
                    present_step(term, &game, cursor, &out)?;
                }
            }
        }
    }
}

fn present_step(
    term: &mut TerminalRenderer,
    game: &TurnController,
    cursor: CellPos,
    out: &StepOutput,
) -> Result<()> {
    for cue in &out.cues {
        debug!(cue = cue.as_str(), "audio cue");
    }
    draw(term, game, cursor)?;

    let secs = step_delay(out, game.timings());
    if secs > 0.0 {
        std::thread::sleep(Duration::from_secs_f32(secs));
    }
    Ok(())
}

fn draw(term: &mut TerminalRenderer, game: &TurnController, cursor: CellPos) -> Result<()> {
    let status = match game.phase() {
        Phase::Idle => "IDLE   pick a gem",
        Phase::Selected(_) => "SELECT pick a second gem",
        Phase::Resolving => "RESOLVING",
    };
    let frame = encode_frame(
        game.grid(),
        ViewState {
            cursor,
            phase: game.phase(),
        },
        status,
    )?;
    term.draw(&frame)
}
