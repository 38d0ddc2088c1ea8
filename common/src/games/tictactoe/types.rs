use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mover {
    X,
    O,
}

impl Mover {
    pub fn opponent(self) -> Self {
        match self {
            Mover::X => Mover::O,
            Mover::O => Mover::X,
        }
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mover::X => write!(f, "X"),
            Mover::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mover(self) -> Option<Mover> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mover::X),
            Cell::O => Some(Mover::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mover> for Cell {
    fn from(mover: Mover) -> Self {
        match mover {
            Mover::X => Cell::X,
            Mover::O => Cell::O,
        }
    }
}

/// One of the eight index triples that win the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinPattern {
    ordinal: usize,
    cells: [usize; 3],
}

impl WinPattern {
    /// Rows, then columns, then the two diagonals.
    pub const ALL: [WinPattern; 8] = [
        WinPattern::new(0, [0, 1, 2]),
        WinPattern::new(1, [3, 4, 5]),
        WinPattern::new(2, [6, 7, 8]),
        WinPattern::new(3, [0, 3, 6]),
        WinPattern::new(4, [1, 4, 7]),
        WinPattern::new(5, [2, 5, 8]),
        WinPattern::new(6, [0, 4, 8]),
        WinPattern::new(7, [2, 4, 6]),
    ];

    const fn new(ordinal: usize, cells: [usize; 3]) -> Self {
        Self { ordinal, cells }
    }

    /// Position of this pattern in [`WinPattern::ALL`].
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mover: Mover,
    pub pattern: WinPattern,
}

impl WinningLine {
    pub fn new(mover: Mover, pattern: WinPattern) -> Self {
        Self { mover, pattern }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(WinningLine),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mover> {
        match self {
            GameOutcome::Win(line) => Some(line.mover),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(line) => write!(f, "{} Wins!", line.mover),
            GameOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Mover),
    Finished(GameOutcome),
}
