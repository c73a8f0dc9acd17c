use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};
use simplelog::LevelFilter;
use snake::config::{IDLE_POLL_INTERVAL_MS, PALETTE, Settings};
use snake::error::AppError;
use snake::game::{GameState, TickOutcome};
use snake::input::{GameInput, InputHandler};
use snake::logging;
use snake::renderer;
use snake::terminal_runtime::{TerminalSession, install_panic_hook};
use snake::ticker::Ticker;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Read settings from this JSON file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    canvas_width: Option<u16>,

    /// Cell edge in pixels; the grid has canvas-width / cell-size cells per side.
    #[arg(long)]
    cell_size: Option<u16>,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Write the log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(canvas_width) = self.canvas_width {
            settings.canvas_width = canvas_width;
        }
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_interval_ms = tick_ms;
        }
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level `{value}`"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("grid-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    let rules = settings.rules()?;
    info!("starting with {settings:?}");

    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    let mut state = GameState::new(rules);
    let mut ticker = Ticker::new(settings.tick_interval());
    let mut input = InputHandler::new();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &PALETTE))?;

        let timeout = ticker
            .time_until_due(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_INTERVAL_MS));

        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }

            handle_input(&mut state, &mut ticker, game_input);
        }

        if ticker.poll(Instant::now()) {
            if let TickOutcome::GameOver(_) = state.tick() {
                ticker.stop();
            }
        }
    }

    info!("quit with score {}", state.score);
    Ok(())
}

fn handle_input(state: &mut GameState, ticker: &mut Ticker, input: GameInput) {
    let was_running = state.is_running();
    state.apply_input(input);

    if !was_running && state.is_running() {
        ticker.start(Instant::now());
    }
}
