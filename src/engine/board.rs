use super::chip::Chip;
use log::warn;
use serde::Serialize;

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

/// A fixed-size grid of chips with column-drop gravity. Cells hold
/// `Chip::TRANSPARENT` until something lands in them.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    columns: usize,
    // Row major, row 0 first
    cells: Vec<Chip>,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Board {
        assert!(
            rows > 0 && columns > 0,
            "A board needs at least one row and one column"
        );
        Board {
            rows,
            columns,
            cells: vec![Chip::TRANSPARENT; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn positions(&self) -> usize {
        self.rows * self.columns
    }

    pub fn chip_at(&self, position: Position) -> Chip {
        debug_assert!(position.row < self.rows && position.column < self.columns);
        self.cells[position.row * self.columns + position.column]
    }

    /// Drops a chip into a column. The chip settles in the lowest
    /// unoccupied row and the landing position is returned. A full or
    /// out-of-range column leaves the board untouched and returns `None`.
    pub fn drop_chip(&mut self, column: usize, chip: Chip) -> Option<Position> {
        if column >= self.columns {
            warn!(
                "Dropping into column {} of a {}-column board",
                column, self.columns
            );
            return None;
        }
        if chip.is_transparent() {
            warn!("Refusing to drop the no-chip sentinel");
            return None;
        }
        for row in (0..self.rows).rev() {
            if self.cells[row * self.columns + column].is_transparent() {
                self.cells[row * self.columns + column] = chip;
                return Some(Position { row, column });
            }
        }
        None
    }

    /// Removes the topmost chip of a column. The inverse of `drop_chip`,
    /// used when a drop is undone.
    pub fn lift_chip(&mut self, column: usize) -> Option<(Position, Chip)> {
        if column >= self.columns {
            return None;
        }
        for row in 0..self.rows {
            let chip = self.cells[row * self.columns + column];
            if !chip.is_transparent() {
                self.cells[row * self.columns + column] = Chip::TRANSPARENT;
                return Some((Position { row, column }, chip));
            }
        }
        None
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        debug_assert!(column < self.columns);
        !self.cells[column].is_transparent()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_transparent())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Chip::TRANSPARENT);
    }

    pub fn loggable(&self) -> serde_json::Value {
        serde_json::json!({
            "rows": self.rows,
            "columns": self.columns,
            "cells": self.cells,
        })
    }
}
