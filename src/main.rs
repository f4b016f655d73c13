use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::{Env, Target};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use vertical_endeavors::config::AppConfig;
use vertical_endeavors::notation::parse_script;
use vertical_endeavors::ui::App;

/// Play Vertical Endeavors in the terminal.
#[derive(Parser)]
#[command(name = "vertical-endeavors", about = "Two-player edge-insertion peg game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "vertical-endeavors.toml")]
    config: PathBuf,

    /// Override board size (rows and columns)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Override number of rows
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Replay a move script (e.g. "L4 R1 SL") without the TUI and print the board
    #[arg(long, value_name = "MOVES")]
    play: Option<String>,

    /// With --play, print the final state as JSON
    #[arg(long, requires = "play")]
    json: bool,

    /// Write logs to this file while the TUI is running
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    init_logging(&cli)?;

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.game.rows = size;
        app_config.game.cols = size;
    }
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.game.cols = cols;
    }
    app_config.validate().context("invalid configuration")?;

    match &cli.play {
        Some(script) => run_headless(&app_config, script, cli.json),
        None => run_tui(app_config).context("terminal UI failed"),
    }
}

/// Headless mode logs to stderr; the TUI logs only to `--log-file`.
fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if cli.play.is_none() {
        match &cli.log_file {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating log file {}", path.display()))?;
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    builder.init();
    Ok(())
}

fn run_headless(config: &AppConfig, script: &str, json: bool) -> Result<()> {
    let actions = parse_script(script).context("parsing move script")?;
    let mut state = config.game.new_game();
    info!(
        "replaying {} action(s) on a {}x{} board",
        actions.len(),
        config.game.rows,
        config.game.cols
    );

    state.replay(&actions)?;

    if json {
        println!("{}", state.snapshot().to_json()?);
    } else {
        print!("{}", state.board());
        println!("Turn: {}", config.ui.name_of(state.turn()));
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    info!("starting a {}x{} game", config.game.rows, config.game.cols);
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
