use crate::games::{GameBroadcaster, SessionRng};
use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{GameError, IllegalMoveReason};
use super::rules::classify;
use super::settings::{PlayMode, TicTacToeSessionSettings};
use super::stats::SessionStats;
use super::types::{GameOutcome, GameStatus, Mover};

/// One match of rounds on a single board, with the stats that outlive each round.
///
/// Human moves go through [`submit_move`](Self::submit_move). When the session
/// plays against a bot, the reply is a separate [`play_bot_turn`](Self::play_bot_turn)
/// call, so broadcasters see the board between the two moves. Human moves are
/// rejected while the bot reply is pending.
pub struct TicTacToeSession<B: GameBroadcaster> {
    board: Board,
    status: GameStatus,
    stats: SessionStats,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, broadcaster: B) -> Self {
        let mut session = Self {
            board: Board::new(),
            status: GameStatus::AwaitingMove(Mover::X),
            stats: SessionStats::new(),
            settings,
            rng,
            broadcaster,
        };
        session.start_new_round();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn current_mover(&self) -> Option<Mover> {
        match self.status {
            GameStatus::AwaitingMove(mover) => Some(mover),
            GameStatus::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.status {
            GameStatus::AwaitingMove(_) => GameOutcome::InProgress,
            GameStatus::Finished(outcome) => outcome,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        match (self.settings.bot_mover(), self.status) {
            (Some(bot), GameStatus::AwaitingMove(mover)) => bot == mover,
            _ => false,
        }
    }

    pub fn submit_move(&mut self, index: usize, mover: Mover) -> Result<GameStatus, GameError> {
        let expected = match self.status {
            GameStatus::AwaitingMove(expected) => expected,
            GameStatus::Finished(_) => {
                return Err(self.reject(IllegalMoveReason::RoundFinished));
            }
        };

        if self.is_bot_turn() {
            return Err(self.reject(IllegalMoveReason::BotTurnPending));
        }

        if mover != expected {
            return Err(self.reject(IllegalMoveReason::NotYourTurn {
                expected,
                found: mover,
            }));
        }

        self.apply_move(index, mover)
    }

    /// Asks the configured bot for a move and applies it. Returns the chosen cell.
    pub fn play_bot_turn(&mut self) -> Result<usize, GameError> {
        let bot_type = self.settings.mode.bot_type();
        let (Some(bot_type), GameStatus::AwaitingMove(mover)) = (bot_type, self.status) else {
            return Err(self.reject(IllegalMoveReason::NotBotTurn));
        };
        if !self.is_bot_turn() {
            return Err(self.reject(IllegalMoveReason::NotBotTurn));
        }

        let input = BotInput::new(&self.board, mover);
        let index = calculate_move(bot_type, &input, &mut self.rng)?;
        log_debug!("Bot ({:?}) as {} picked cell {}", bot_type, mover, index);

        self.apply_move(index, mover)?;
        Ok(index)
    }

    pub fn start_new_round(&mut self) {
        self.board.reset();
        self.status = GameStatus::AwaitingMove(Mover::X);
        self.broadcaster.broadcast_board_reset();
        self.broadcaster.broadcast_turn(Mover::X);
    }

    /// New round with the scoreboard zeroed. Best streak and totals survive.
    pub fn reset_match(&mut self) {
        self.start_new_round();
        self.stats.reset_scores();
        self.broadcaster.broadcast_stats(&self.stats);
    }

    pub fn clear_stats(&mut self) {
        self.stats.clear();
        self.broadcaster.broadcast_stats(&self.stats);
        self.start_new_round();
    }

    /// Switching modes restarts the match, as a difficulty change does.
    pub fn set_mode(&mut self, mode: PlayMode) {
        log!("Play mode changed from {} to {}", self.settings.mode, mode);
        self.settings.mode = mode;
        self.reset_match();
    }

    fn apply_move(&mut self, index: usize, mover: Mover) -> Result<GameStatus, GameError> {
        if let Err(e) = self.board.set(index, mover) {
            log_debug!("Rejected move by {} at {}: {}", mover, index, e);
            return Err(e);
        }

        self.stats.record_move();
        self.broadcaster.broadcast_cell_changed(index, mover);

        let outcome = classify(&self.board);
        self.status = match outcome {
            GameOutcome::Win(line) => {
                self.stats.record_win(line.mover);
                log!(
                    "{} wins with pattern {:?} after {} moves",
                    line.mover,
                    line.pattern.cells(),
                    self.board.filled_count()
                );
                GameStatus::Finished(outcome)
            }
            GameOutcome::Draw => {
                self.stats.record_draw();
                log!("Round drawn");
                GameStatus::Finished(outcome)
            }
            GameOutcome::InProgress => GameStatus::AwaitingMove(mover.opponent()),
        };

        self.broadcaster.broadcast_stats(&self.stats);
        match self.status {
            GameStatus::Finished(outcome) => self.broadcaster.broadcast_outcome(&outcome),
            GameStatus::AwaitingMove(next) => self.broadcaster.broadcast_turn(next),
        }

        Ok(self.status)
    }

    fn reject(&self, reason: IllegalMoveReason) -> GameError {
        log_debug!("Rejected move: {}", reason);
        GameError::IllegalMove(reason)
    }
}
