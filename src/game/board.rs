use std::fmt;

use super::Player;

/// Classic board size.
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Column-major grid of cells. Column `c`, row `r` lives at `c * height + r`,
/// with row 0 at the bottom.
///
/// Only [`GameBoard`](super::GameBoard) mutates a grid; everything else sees it
/// through `&Grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are validated by the caller.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at (col, row), or `None` when off the board.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.width && row < self.height {
            Some(self.cells[col * self.height + row])
        } else {
            None
        }
    }

    /// Signed lookup for walking outward from a cell. Anything with
    /// `x < 0`, `y < 0`, `x >= width` or `y >= height` is off the board.
    pub fn probe(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    /// Lowest empty row in a column, `None` if the column is full.
    ///
    /// The caller guarantees `col < width`.
    pub fn column_top(&self, col: usize) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }
        (0..self.height).find(|&row| self.cells[col * self.height + row].is_empty())
    }

    /// A column is full once its topmost row is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cells[col * self.height + self.height - 1].is_empty()
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells in a column.
    pub fn column_height(&self, col: usize) -> usize {
        self.column_top(col).unwrap_or(self.height)
    }

    /// Drop a cell into a column, returning the row it settled on.
    pub(crate) fn place(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.column_top(col)?;
        self.cells[col * self.height + row] = cell;
        Some(row)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl fmt::Display for Grid {
    /// Top row first, one character per cell: `.` empty, `X` first player,
    /// `O` second player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let symbol = match self.cells[col * self.height + row] {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
