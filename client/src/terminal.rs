use std::io::Write;

use common::games::GameBroadcaster;
use common::games::tictactoe::{BOARD_SIZE, GameOutcome, Mover, SessionStats, WinPattern};

/// Renders session events as text. Keeps its own copy of the board built
/// from cell notifications, so it never reads session state directly.
pub struct TerminalBroadcaster<W: Write> {
    out: W,
    cells: [Option<Mover>; BOARD_SIZE],
    stats: SessionStats,
}

impl<W: Write> TerminalBroadcaster<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cells: [None; BOARD_SIZE],
            stats: SessionStats::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn show_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn show_stats(&mut self) {
        let stats = &self.stats;
        let streak_owner = stats
            .streak_owner
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            self.out,
            "Score  X: {}  O: {}  Draws: {}",
            stats.scores.x, stats.scores.o, stats.scores.draws
        );
        let _ = writeln!(
            self.out,
            "Games: {}  Streak: {} ({})  Best streak: {}  Win rate: {}%  Avg moves: {}",
            stats.games_played,
            stats.current_streak,
            streak_owner,
            stats.best_streak,
            stats.win_rate_percent(),
            stats.average_moves_rounded()
        );
    }

    fn render_board(&mut self, highlight: Option<WinPattern>) {
        let _ = writeln!(self.out);
        for row in 0..3 {
            if row > 0 {
                let _ = writeln!(self.out, "-----+-----+-----");
            }
            let line: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let symbol = match self.cells[index] {
                        Some(mover) => mover.to_string(),
                        None => (index + 1).to_string(),
                    };
                    if highlight.is_some_and(|p| p.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            let _ = writeln!(self.out, " {} | {} | {} ", line[0], line[1], line[2]);
        }
        let _ = writeln!(self.out);
    }
}

impl<W: Write> GameBroadcaster for TerminalBroadcaster<W> {
    fn broadcast_cell_changed(&mut self, index: usize, mover: Mover) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(mover);
        }
    }

    fn broadcast_outcome(&mut self, outcome: &GameOutcome) {
        let highlight = match outcome {
            GameOutcome::Win(line) => Some(line.pattern),
            _ => None,
        };
        self.render_board(highlight);
        let _ = writeln!(self.out, "{}", outcome);
        self.show_stats();
        let _ = writeln!(self.out, "Press <enter> to play again, 'r' to reset, 'q' to quit.");
    }

    fn broadcast_stats(&mut self, stats: &SessionStats) {
        self.stats = stats.clone();
    }

    fn broadcast_turn(&mut self, mover: Mover) {
        self.render_board(None);
        let _ = writeln!(self.out, "{}'s turn", mover);
    }

    fn broadcast_board_reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}
