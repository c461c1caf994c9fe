use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use alphabeta_connect_four::ai::{build_player, Player};
use alphabeta_connect_four::config::AppConfig;
use alphabeta_connect_four::session::Session;
use alphabeta_connect_four::ui::{App, TextView};

/// Play Connect Four against a friend or an alpha-beta computer player.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four with an alpha-beta computer player")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Play on the line-oriented text interface instead of the TUI
    #[arg(long)]
    text: bool,

    /// Ask for both players' names at startup (text mode only)
    #[arg(long, requires = "text")]
    ask: bool,

    /// Override the look-ahead of every computer player
    #[arg(long)]
    depth: Option<u32>,

    /// Write logs to this file (the TUI owns the terminal otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.override_depth(depth);
    }

    if cli.print_config {
        print!(
            "{}",
            toml::to_string_pretty(&config).context("serializing config")?
        );
        return Ok(());
    }

    if cli.text {
        run_text(config, cli.ask)
    } else {
        config.validate().context("invalid configuration")?;
        let players = build_players(&config);
        run_tui(players).context("running the terminal UI")
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // Logging to stderr would draw over the TUI.
        None if cli.text => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn build_players(config: &AppConfig) -> [Box<dyn Player>; 2] {
    config
        .players()
        .map(|player| build_player(player, &config.search, config.heuristic))
}

fn run_text(mut config: AppConfig, ask: bool) -> Result<()> {
    let mut view = TextView::stdio();
    if ask {
        config.first = view.prompt_player("first")?;
        config.second = view.prompt_player("second")?;
    }
    config.validate().context("invalid configuration")?;

    let mut session = Session::new(build_players(&config));
    session.run(&mut view)?;
    Ok(())
}

fn run_tui(players: [Box<dyn Player>; 2]) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(players);
    let res = app.run(&mut terminal);

    // Restore the terminal even when the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
