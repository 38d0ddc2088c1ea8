use std::fmt;

use super::error::GameError;
use super::types::{BOARD_SIZE, Cell, Mover};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex(index))
    }

    pub fn set(&mut self, index: usize, mover: Mover) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex(index))?;

        if !cell.is_empty() {
            return Err(GameError::CellOccupied(index));
        }

        *cell = mover.into();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    // Unchecked writes for speculative search; callers pair each with `clear`.
    pub(crate) fn place(&mut self, index: usize, mover: Mover) {
        self.cells[index] = mover.into();
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.mover() {
                    Some(mover) => mover.to_string(),
                    None => (row * 3 + col + 1).to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {} ", symbols[0], symbols[1], symbols[2])?;
        }
        Ok(())
    }
}
