//! Terminal falling-block runner (default binary).
//!
//! Owns the clock and the event loop: key events become engine intents, every
//! frame the engine gets a tick with the elapsed milliseconds, and the
//! snapshot is rendered through a framebuffer (no widget toolkit).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use falling_blocks::cli::{init_logging, Args};
use falling_blocks::core::{Engine, GameSnapshot};
use falling_blocks::input::{action_for_event, should_quit};
use falling_blocks::term::{
    snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use falling_blocks::types::FRAME_MS;

/// Refresh interval for screens where nothing moves.
const STATIC_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.engine_config(clock_seed());
    let mut engine = Engine::with_config(config)?;
    info!("seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let view = GameView::default();
    let clock = Instant::now();
    let frame = Duration::from_millis(u64::from(FRAME_MS));

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut next_frame = Instant::now();

    loop {
        // Input with timeout until next frame; commands apply immediately.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!("quit at score {}", engine.score());
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        if Instant::now() < next_frame {
            continue;
        }
        next_frame = Instant::now() + frame;

        let now_ms = clock.elapsed().as_millis() as u64;
        engine.tick(now_ms);

        engine.snapshot_into(&mut snap);
        let redraw = engine.take_redraw();
        if throttle.should_render(now_ms, snapshot_fingerprint(&snap), redraw) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
