use super::board::Board;
use super::types::{GameOutcome, Mover, WinPattern, WinningLine};

/// First pattern, in [`WinPattern::ALL`] order, held by a single mover.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    WinPattern::ALL.iter().find_map(|pattern| {
        let [a, b, c] = pattern.cells();
        let mover = cells[a].mover()?;
        if cells[a] == cells[b] && cells[b] == cells[c] {
            Some(WinningLine::new(mover, *pattern))
        } else {
            None
        }
    })
}

pub fn winner(board: &Board) -> Option<Mover> {
    winning_line(board).map(|line| line.mover)
}

pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}

pub fn classify(board: &Board) -> GameOutcome {
    if let Some(line) = winning_line(board) {
        return GameOutcome::Win(line);
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
