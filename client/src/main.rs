mod command;
mod config;
mod runner;
mod terminal;

use std::time::Duration;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Mover, PlayMode, TicTacToeSession};
use common::logger::{LogLevel, init_logger};
use common::{log, log_warn};
use tokio::io::BufReader;

use command::HELP;
use config::{CONFIG_FILE, get_config_manager};
use terminal::TerminalBroadcaster;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// two_player, easy or hard
    #[arg(long)]
    mode: Option<PlayMode>,

    /// Mark played by the computer
    #[arg(long, value_parser = parse_mover)]
    bot_mark: Option<Mover>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the easy bot
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,
}

fn parse_mover(s: &str) -> Result<Mover, String> {
    match s.to_ascii_lowercase().as_str() {
        "x" => Ok(Mover::X),
        "o" => Ok(Mover::O),
        other => Err(format!("Unknown mark '{}', expected x or o", other)),
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    match s.to_ascii_lowercase().as_str() {
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        other => Err(format!("Unknown log level '{}'", other)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(bot_mark) = args.bot_mark {
        config.game.bot_mark = bot_mark;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.game.bot_delay_ms = delay_ms;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate()?;

    init_logger(Some("tictactoe".to_string()), config.log_level);

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} game, computer plays {}, seed {}",
        config.game.mode,
        config.game.bot_mark,
        rng.seed()
    );

    let broadcaster = TerminalBroadcaster::new(std::io::stdout());
    let mut session = TicTacToeSession::new(config.game, rng, broadcaster);
    session.broadcaster_mut().show_message(HELP);

    let bot_delay = Duration::from_millis(config.game.bot_delay_ms);
    if let Err(e) = runner::run_game(&mut session, BufReader::new(tokio::io::stdin()), bot_delay).await {
        log_warn!("Input error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
