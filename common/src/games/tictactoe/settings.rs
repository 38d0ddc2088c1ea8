use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::BotType;
use super::types::Mover;

const MAX_BOT_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    TwoPlayer,
    Easy,
    Hard,
}

impl PlayMode {
    pub fn bot_type(self) -> Option<BotType> {
        match self {
            PlayMode::TwoPlayer => None,
            PlayMode::Easy => Some(BotType::Random),
            PlayMode::Hard => Some(BotType::Minimax),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::TwoPlayer => write!(f, "two_player"),
            PlayMode::Easy => write!(f, "easy"),
            PlayMode::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "two_player" | "human" | "pvp" => Ok(PlayMode::TwoPlayer),
            "easy" | "random" => Ok(PlayMode::Easy),
            "hard" | "minimax" => Ok(PlayMode::Hard),
            other => Err(format!("Unknown play mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSessionSettings {
    pub mode: PlayMode,
    pub bot_mark: Mover,
    pub bot_delay_ms: u64,
}

impl TicTacToeSessionSettings {
    /// Mark the bot plays with, if the mode has a bot at all.
    pub fn bot_mover(&self) -> Option<Mover> {
        self.mode.bot_type().map(|_| self.bot_mark)
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: PlayMode::TwoPlayer,
            bot_mark: Mover::O,
            bot_delay_ms: 500,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}
