use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::{replay, GameBoard, GameState};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override the number in a row needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Replay these 1-based columns without the terminal UI, then print the board
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Run in headless mode (stdout output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (RUST_LOG selects the level, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(connect) = cli.connect {
        config.board.victory_condition = connect;
    }
    config.validate().context("validating configuration")?;

    let board = config.new_game().context("creating game")?;

    if cli.headless {
        run_headless(board, &cli.moves)
    } else {
        if !cli.moves.is_empty() {
            bail!("--moves requires --headless");
        }
        run_tui(board).context("running terminal UI")
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    // The TUI owns the terminal, so without a log file there is no subscriber.
    Ok(())
}

/// Replay a column sequence and print the result.
fn run_headless(mut board: GameBoard, moves: &[usize]) -> Result<()> {
    let summary = replay(&mut board, moves)?;
    for (number, column) in &summary.skipped {
        println!("move {}: column {} is full, skipped", number, column);
    }

    print!("{}", board.grid());
    match summary.state {
        GameState::InProgress => {
            let name = &board.player_profile(board.current_player()).name;
            println!("In progress, {} to move", name);
        }
        GameState::Won(player) => {
            println!("{} wins after {} moves", board.player_profile(player).name, summary.move_count);
        }
        GameState::Draw => println!("Draw after {} moves", summary.move_count),
    }
    Ok(())
}

fn run_tui(board: GameBoard) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(board);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
