use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, WriteLogger};
use torus_snake::config::{
    DEFAULT_CELL_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_RATE, GameConfig,
};
use torus_snake::error::AppError;
use torus_snake::game::Game;
use torus_snake::input::poll_input;
use torus_snake::renderer;
use torus_snake::session::{Session, SessionEvent};
use torus_snake::terminal_runtime::{AppTerminal, TerminalGuard};
use torus_snake::ui::hud::HudInfo;

/// Longest wait for input between two redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Snake on a wrap-around grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Initial speed in ticks per second.
    #[arg(short = 'f', long, default_value_t = DEFAULT_TICK_RATE)]
    fps: u32,

    /// Terminal columns per grid cell.
    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_CELL_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=4),
    )]
    cell_width: u16,

    /// Seed for apple and start placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log engine events at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("torus-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let config = GameConfig::new(cli.width, cli.height, cli.fps, cli.cell_width, cli.seed)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new(config.grid, rng)?;
    let mut session = Session::new(game, config.tick_rate);

    log::info!(
        "starting {}x{} game at {} ticks/s",
        config.grid.width,
        config.grid.height,
        config.tick_rate.get()
    );

    let mut guard = TerminalGuard::enter()?;
    game_loop(guard.terminal_mut(), &mut session, config.cell_width)?;

    log::info!("quit with score {}", session.game().score());
    Ok(())
}

fn game_loop(
    terminal: &mut AppTerminal,
    session: &mut Session<StdRng>,
    cell_width: u16,
) -> Result<(), AppError> {
    loop {
        let state = session.game().render_state();
        let info = HudInfo {
            tick_rate: session.tick_rate(),
            cell_width,
        };
        terminal.draw(|frame| renderer::render(frame, &state, &info))?;

        let timeout = session
            .time_until_tick(Instant::now())
            .map_or(FRAME_INTERVAL, |wait| wait.min(FRAME_INTERVAL));

        if let Some(input) = poll_input(timeout)? {
            let event = session.handle_input(input, Instant::now());
            log::debug!("{input:?} -> {event:?}");
            if event == SessionEvent::Quit {
                return Ok(());
            }
        }

        session.tick_if_due(Instant::now());
    }
}

fn init_logging(path: Option<&Path>, verbose: bool) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;

    Ok(())
}
