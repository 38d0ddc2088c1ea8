use serde::{Deserialize, Serialize};

use super::types::Mover;

/// Match score shown on the scoreboard; zeroed by a match reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn wins_for(&self, mover: Mover) -> u32 {
        match mover {
            Mover::X => self.x,
            Mover::O => self.o,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinCounts {
    pub x: u32,
    pub o: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub scores: Scoreboard,
    pub wins: WinCounts,
    pub games_played: u32,
    pub current_streak: u32,
    pub streak_owner: Option<Mover>,
    pub best_streak: u32,
    pub total_moves: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self) {
        self.total_moves += 1;
    }

    pub fn record_win(&mut self, winner: Mover) {
        match winner {
            Mover::X => {
                self.scores.x += 1;
                self.wins.x += 1;
            }
            Mover::O => {
                self.scores.o += 1;
                self.wins.o += 1;
            }
        }
        self.games_played += 1;

        if self.streak_owner == Some(winner) {
            self.current_streak += 1;
        } else {
            self.current_streak = 1;
            self.streak_owner = Some(winner);
        }

        if self.current_streak > self.best_streak {
            self.best_streak = self.current_streak;
        }
    }

    /// A draw breaks the streak but leaves its owner in place.
    pub fn record_draw(&mut self) {
        self.scores.draws += 1;
        self.games_played += 1;
        self.current_streak = 0;
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn total_wins(&self) -> u32 {
        self.wins.x + self.wins.o
    }

    /// Fraction of played games that ended in a win for either side.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_wins() as f64 / self.games_played as f64
        }
    }

    pub fn win_rate_percent(&self) -> u32 {
        (self.win_rate() * 100.0).round() as u32
    }

    pub fn average_moves(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games_played as f64
        }
    }

    pub fn average_moves_rounded(&self) -> u32 {
        self.average_moves().round() as u32
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_wins_build_streak() {
        let mut stats = SessionStats::new();
        for _ in 0..3 {
            stats.record_win(Mover::X);
        }

        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.streak_owner, Some(Mover::X));
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.scores.wins_for(Mover::X), 3);
    }

    #[test]
    fn test_draw_resets_streak_but_keeps_best() {
        let mut stats = SessionStats::new();
        for _ in 0..3 {
            stats.record_win(Mover::X);
        }
        stats.record_draw();

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.streak_owner, Some(Mover::X));
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.scores.draws, 1);
        assert_eq!(stats.games_played, 4);
    }

    #[test]
    fn test_streak_owner_change_restarts_at_one() {
        let mut stats = SessionStats::new();
        stats.record_win(Mover::X);
        stats.record_win(Mover::X);
        stats.record_win(Mover::O);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.streak_owner, Some(Mover::O));
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn test_same_owner_after_draw_counts_from_zero() {
        let mut stats = SessionStats::new();
        stats.record_win(Mover::O);
        stats.record_draw();
        stats.record_win(Mover::O);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
    }

    #[test]
    fn test_derived_rates() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_moves(), 0.0);

        stats.record_win(Mover::X);
        stats.record_win(Mover::O);
        stats.record_draw();
        for _ in 0..22 {
            stats.record_move();
        }

        assert_eq!(stats.win_rate_percent(), 67);
        assert_eq!(stats.average_moves_rounded(), 7);
    }

    #[test]
    fn test_reset_scores_keeps_long_running_counters() {
        let mut stats = SessionStats::new();
        stats.record_win(Mover::X);
        stats.record_win(Mover::X);
        stats.record_draw();
        stats.reset_scores();

        assert_eq!(stats.scores, Scoreboard::default());
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins.x, 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut stats = SessionStats::new();
        stats.record_win(Mover::O);
        stats.record_move();
        stats.clear();

        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_stats_survive_yaml() {
        let mut stats = SessionStats::new();
        stats.record_win(Mover::X);
        stats.record_draw();
        stats.record_win(Mover::O);
        stats.record_move();

        let yaml = stats.to_yaml().unwrap();
        let restored = SessionStats::from_yaml(&yaml).unwrap();
        assert_eq!(restored, stats);
    }
}
