mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use log::LevelFilter;

use pixel_blaster::assets::Assets;
use pixel_blaster::config::{self, AppConfig};
use pixel_blaster::input::InputState;
use pixel_blaster::viewport::Viewport;
use pixel_blaster::{Game, GameError};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: the terminal is taken over by the game screen.
fn init_logging(path: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("cannot open log file {}: {e}; logging disabled", path.display());
            builder.filter_level(LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One iteration per tick: drain input, step the simulation, play its cues,
/// draw, then sleep out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    config: &AppConfig,
    assets: &Assets,
    seed: u64,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols, rows);
    let mut input = InputState::new();
    let mut game = Game::new(seed);
    let frame = config.frame_duration();

    while game.is_running() {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Resize(cols, rows) => viewport = Viewport::new(cols, rows),
                ev => input.handle_event(&ev, &viewport),
            }
        }

        game.step(&input.take_frame());

        display::play(out, assets, &game.drain_cues())?;
        display::render(out, &game, assets, &viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }

    log::info!("quit at score {}, level {}", game.score, game.level);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging(&config::log_file_from_env());
    let config = AppConfig::from_env();

    // Resolve assets before touching the terminal so a failure prints plainly.
    let assets = Assets::load(&config.asset_dir).inspect_err(|e| log::error!("{e}"))?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("starting at {} fps with seed {}", config.fps, seed);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    let result = game_loop(&mut out, &config, &assets, seed);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}
