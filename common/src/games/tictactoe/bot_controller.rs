use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::error::GameError;
use super::rules::winner;
use super::types::{BOARD_SIZE, Mover};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Random,
    Minimax,
}

pub struct BotInput {
    pub board: Board,
    pub current_mover: Mover,
}

impl BotInput {
    pub fn new(board: &Board, current_mover: Mover) -> Self {
        Self {
            board: board.clone(),
            current_mover,
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match bot_type {
        BotType::Random => calculate_random_move(&input.board, rng),
        BotType::Minimax => calculate_minimax_move(&input.board, input.current_mover),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Optimal move for `bot_mover` by exhaustive minimax.
///
/// Candidates are scanned in ascending index order and only a strictly
/// better score replaces the current best, so the lowest index wins ties.
/// The caller's board is left untouched; the search runs on a scratch copy.
pub fn calculate_minimax_move(board: &Board, bot_mover: Mover) -> Result<usize, GameError> {
    if board.is_full() {
        return Err(GameError::NoLegalMove);
    }

    let mut scratch = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in 0..BOARD_SIZE {
        if !scratch.cells()[index].is_empty() {
            continue;
        }

        scratch.place(index, bot_mover);
        let score = minimax(&mut scratch, 0, false, bot_mover);
        scratch.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mover: Mover) -> i32 {
    if let Some(winner) = winner(board) {
        return if winner == bot_mover {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let mover = if is_maximizing {
        bot_mover
    } else {
        bot_mover.opponent()
    };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..BOARD_SIZE {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.place(index, mover);
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mover);
        board.clear(index);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}
