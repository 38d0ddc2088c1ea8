mod board;
mod bot_controller;
mod error;
mod rules;
mod session;
mod settings;
mod stats;
mod types;

pub use board::Board;
pub use bot_controller::{
    BotInput, BotType, calculate_minimax_move, calculate_move, calculate_random_move,
};
pub use error::{GameError, IllegalMoveReason};
pub use rules::{classify, is_draw, winner, winning_line};
pub use session::TicTacToeSession;
pub use settings::{PlayMode, TicTacToeSessionSettings};
pub use stats::{Scoreboard, SessionStats, WinCounts};
pub use types::{BOARD_SIZE, Cell, GameOutcome, GameStatus, Mover, WinPattern, WinningLine};
