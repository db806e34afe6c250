//! Wall grid and cell addressing
//!
//! The grid is purely discrete; pixel positions map onto it through
//! `cell_of` and `Cell::center` with an explicit cell size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A (row, col) grid address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pixel-space centre of this cell
    #[inline]
    pub fn center(self, cell_size: f32) -> Vec2 {
        Vec2::new(
            self.col as f32 * cell_size + cell_size / 2.0,
            self.row as f32 * cell_size + cell_size / 2.0,
        )
    }
}

/// Orthogonal neighbour offsets `(d_row, d_col)`
pub const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rows x cols wall map, row-major, `true` = wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

impl Grid {
    /// A grid with every cell set to wall
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: vec![true; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then_some(cell.row * self.cols + cell.col)
    }

    /// Out-of-bounds cells count as wall
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index(cell).is_none_or(|i| self.walls[i])
    }

    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Mark a cell open (ignored when out of bounds)
    pub fn open(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.walls[i] = false;
        }
    }

    /// Cell at a signed offset from `cell`, if it lies inside the grid
    pub fn offset(&self, cell: Cell, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = cell.row.checked_add_signed(d_row)?;
        let col = cell.col.checked_add_signed(d_col)?;
        let target = Cell::new(row, col);
        self.contains(target).then_some(target)
    }

    /// In-bounds orthogonal neighbours of a cell
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(cell, dr, dc))
    }

    /// Open cell whose four orthogonal neighbours all exist and are open
    pub fn is_clear(&self, cell: Cell) -> bool {
        self.is_open(cell)
            && ORTHOGONAL
                .iter()
                .all(|&(dr, dc)| self.offset(cell, dr, dc).is_some_and(|n| self.is_open(n)))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&c| self.is_open(c))
    }

    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Map a pixel position to the grid cell containing it
    ///
    /// Returns `None` for positions left of / above the origin, beyond
    /// the last row or column, or non-finite.
    pub fn cell_of(&self, pos: Vec2, cell_size: f32) -> Option<Cell> {
        let col = (pos.x / cell_size).floor();
        let row = (pos.y / cell_size).floor();
        if !(col >= 0.0 && row >= 0.0) || !col.is_finite() || !row.is_finite() {
            return None;
        }
        let cell = Cell::new(row as usize, col as usize);
        self.contains(cell).then_some(cell)
    }
}
