use crate::games::tictactoe::{GameOutcome, Mover, SessionStats};

/// Receives session events for rendering. Every hook defaults to a no-op.
pub trait GameBroadcaster {
    fn broadcast_cell_changed(&mut self, _index: usize, _mover: Mover) {}

    fn broadcast_outcome(&mut self, _outcome: &GameOutcome) {}

    fn broadcast_stats(&mut self, _stats: &SessionStats) {}

    fn broadcast_turn(&mut self, _mover: Mover) {}

    fn broadcast_board_reset(&mut self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBroadcaster;

impl GameBroadcaster for NoopBroadcaster {}
