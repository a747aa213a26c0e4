// grid.rs - Row-major cell buffer with toroidal neighbor lookup

use crate::cell::Cell;

/// Offsets of the eight cells surrounding a cell, row by row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Fixed-size row-major grid of cells.
///
/// Direct addressing is bounds-checked and never wraps. Wrapping only
/// happens in [`Grid::alive_neighbors`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// An all-dead grid. Callers guarantee `cols * rows > 0`.
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![Cell::Dead; cols * rows],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Linear index of `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i % cols, i / cols))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Number of live cells among the eight toroidal neighbors of `(x, y)`.
    ///
    /// `(x, y)` must be in range. On an axis of extent 1 or 2 the same
    /// wrapped cell is visited more than once and counted each time.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = wrap_step(x, dx, self.cols);
                let ny = wrap_step(y, dy, self.rows);
                self.cells[ny * self.cols + nx].is_alive()
            })
            .count()
    }
}

/// Moves `coord` by a single step `delta` in `{-1, 0, 1}`, wrapping at the
/// edges: one step before 0 is `extent - 1`, one step past the end is 0.
#[inline]
pub fn wrap_step(coord: usize, delta: isize, extent: usize) -> usize {
    debug_assert!(coord < extent);
    debug_assert!((-1..=1).contains(&delta));
    match delta {
        -1 if coord == 0 => extent - 1,
        -1 => coord - 1,
        1 if coord + 1 >= extent => 0,
        1 => coord + 1,
        _ => coord,
    }
}
