//! Terminal memory-match runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Configuration comes from `MEMORY_MATCH_*` environment variables; logs go to
//! the file named by `MEMORY_MATCH_LOG`, never to the screen.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::core::{Deck, GameConfig, GameController};
use memory_match::input::{handle_key_event, should_quit};
use memory_match::term::{
    apply_input, FrameBuffer, GameView, RenderThrottle, TermBoard, TerminalRenderer, Viewport,
};
use memory_match::types::TICK_MS;

/// Redraw at least this often even when nothing changed.
const MAX_IDLE_RENDER_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(config.log_path.as_deref())?;

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let deck = Deck::with_pairs(config.pairs)?;
    let board = TermBoard::for_deck(&deck);
    let mut game = GameController::new(deck, board, config.rules, seed);
    info!(seed, pairs = config.pairs, "memory match starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameController<TermBoard>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(MAX_IDLE_RENDER_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let phase = game.phase();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, game.view().fingerprint(phase)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(game.view(), phase, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        apply_input(game, input);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick with the real elapsed time so the clock does not drift.
        let since_tick = last_tick.elapsed();
        if since_tick >= tick_duration {
            last_tick = Instant::now();
            game.tick(since_tick.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

/// Install a file-backed subscriber when a log path is configured.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
