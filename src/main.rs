//! Wordle Client - CLI
//!
//! Plays against a Wordle server in a full-screen TUI, or runs one-shot
//! commands against the same server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use wordle_client::{
    commands::{ResetTarget, fetch_stats, reset, show_game},
    config::{ClientConfig, DEFAULT_SERVER_URL, SubmitGuard},
    output::{print_board, print_stats},
    sync::HttpTransport,
};

#[derive(Parser)]
#[command(
    name = "wordle_client",
    about = "Terminal client for a Wordle game server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the game server
    #[arg(short, long, global = true, env = "WORDLE_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(short, long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "wordle_client.log")]
    log_file: PathBuf,

    /// Let a guess be submitted while the previous one is still pending
    #[arg(long, global = true)]
    allow_concurrent_submit: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Print the current board
    Show,

    /// Print player statistics
    Stats,

    /// Start a new game
    Reset,

    /// Clear player statistics
    ResetStats,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server_url: self.server.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            submit_guard: if self.allow_concurrent_submit {
                SubmitGuard::Allow
            } else {
                SubmitGuard::BlockWhileInFlight
            },
            ..ClientConfig::default()
        }
    }
}

/// Log to a file while the alternate screen is active, to stderr otherwise
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.client_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then_some(&cli.log_file);
    init_logging(log_file)?;

    match command {
        Commands::Play => run_play_command(config),
        Commands::Show => run_show_command(&config),
        Commands::Stats => run_stats_command(&config),
        Commands::Reset => run_reset_command(&config, ResetTarget::Game),
        Commands::ResetStats => run_reset_command(&config, ResetTarget::Stats),
    }
}

fn transport(config: &ClientConfig) -> Result<HttpTransport> {
    HttpTransport::new(&config.server_url, config.request_timeout)
        .context("Failed to create HTTP client")
}

fn run_show_command(config: &ClientConfig) -> Result<()> {
    let result = show_game(&transport(config)?).context("Failed to fetch game")?;
    print_board(&result);
    Ok(())
}

fn run_stats_command(config: &ClientConfig) -> Result<()> {
    let stats = fetch_stats(&transport(config)?).context("Failed to fetch statistics")?;
    print_stats(&stats);
    Ok(())
}

fn run_reset_command(config: &ClientConfig, target: ResetTarget) -> Result<()> {
    reset(&transport(config)?, target).context("Reset failed")?;
    match target {
        ResetTarget::Game => println!("New game started."),
        ResetTarget::Stats => println!("Statistics cleared."),
    }
    Ok(())
}

fn run_play_command(config: ClientConfig) -> Result<()> {
    use wordle_client::interactive::run_tui;

    run_tui(config)
}
