use std::fmt;

use super::types::Mover;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    RoundFinished,
    NotYourTurn { expected: Mover, found: Mover },
    BotTurnPending,
    NotBotTurn,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::RoundFinished => write!(f, "round is already over"),
            IllegalMoveReason::NotYourTurn { expected, found } => {
                write!(f, "it is {}'s turn, not {}'s", expected, found)
            }
            IllegalMoveReason::BotTurnPending => write!(f, "waiting for the bot to move"),
            IllegalMoveReason::NotBotTurn => write!(f, "it is not the bot's turn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidIndex(usize),
    CellOccupied(usize),
    IllegalMove(IllegalMoveReason),
    NoLegalMove,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex(index) => {
                write!(f, "Cell index {} is out of range 0..=8", index)
            }
            GameError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            GameError::IllegalMove(reason) => write!(f, "Illegal move: {}", reason),
            GameError::NoLegalMove => write!(f, "No legal move: board is full"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<IllegalMoveReason> for GameError {
    fn from(reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove(reason)
    }
}
