// board.rs - Double-buffered toroidal Life engine

use rand::Rng;
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::error::{BoardError, Result};
use crate::grid::Grid;
use crate::patterns::Pattern;

/// A fixed-size Game of Life board on a torus.
///
/// The board owns two grids of identical size. One is the current
/// generation, read by callers and by the neighbor count; the other is
/// scratch space written during [`LifeBoard::update`]. An advance flips which
/// buffer is current instead of copying cells, so no allocation happens after
/// construction.
///
/// A new board is all dead and paused.
#[derive(Clone, Debug)]
pub struct LifeBoard {
    buffers: [Grid; 2],
    current: usize,
    paused: bool,
}

impl LifeBoard {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(BoardError::EmptyDimensions { cols, rows });
        }
        debug!(cols, rows, "created life board");
        Ok(Self {
            buffers: [Grid::new(cols, rows), Grid::new(cols, rows)],
            current: 0,
            paused: true,
        })
    }

    /// `(columns, rows)`, fixed for the lifetime of the board.
    pub fn size(&self) -> (usize, usize) {
        let grid = self.grid();
        (grid.cols(), grid.rows())
    }

    /// The current generation.
    ///
    /// The borrow ends before the next [`LifeBoard::update`], so re-fetch
    /// after every advance.
    pub fn grid(&self) -> &Grid {
        &self.buffers[self.current]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "toggled pause");
    }

    pub fn set_cell(&mut self, x: usize, y: usize) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.current_mut().cells_mut()[i] = Cell::Alive;
        Ok(())
    }

    pub fn unset_cell(&mut self, x: usize, y: usize) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.current_mut().cells_mut()[i] = Cell::Dead;
        Ok(())
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<()> {
        let i = self.checked_index(x, y)?;
        let cells = self.current_mut().cells_mut();
        cells[i] = cells[i].toggled();
        Ok(())
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        for grid in &mut self.buffers {
            grid.fill(Cell::Dead);
        }
        debug!("cleared board");
    }

    /// Advances one generation unless paused. Returns whether it advanced.
    pub fn update(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let [a, b] = &mut self.buffers;
        let (current, next) = if self.current == 0 { (&*a, b) } else { (&*b, a) };

        let cols = current.cols();
        for (i, slot) in next.cells_mut().iter_mut().enumerate() {
            let alive = current.alive_neighbors(i % cols, i / cols);
            *slot = next_state(current.cells()[i], alive);
        }

        self.current ^= 1;
        trace!(live = self.grid().live_count(), "advanced generation");
        true
    }

    /// Places `pattern` with its top-left corner at `(x, y)` in the current
    /// generation. Nothing is written if any cell would fall off the board.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<()> {
        let indices = pattern
            .cells
            .iter()
            .map(|&(dx, dy)| {
                let px = x.saturating_add(dx);
                let py = y.saturating_add(dy);
                self.checked_index(px, py)
            })
            .collect::<Result<Vec<_>>>()?;

        let cells = self.current_mut().cells_mut();
        for i in indices {
            cells[i] = Cell::Alive;
        }
        debug!(pattern = pattern.name, x, y, "stamped pattern");
        Ok(())
    }

    /// Replaces the current generation with random cells, each alive with
    /// probability `density` (clamped to `0.0..=1.0`).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in self.current_mut().cells_mut() {
            *cell = Cell::from(rng.random_bool(p));
        }
        debug!(density = p, live = self.grid().live_count(), "randomized board");
    }

    fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.current]
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        let grid = self.grid();
        grid.index(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            cols: grid.cols(),
            rows: grid.rows(),
        })
    }
}

/// B3/S23: birth on exactly 3, survival on 2 or 3.
#[inline]
fn next_state(cell: Cell, alive: usize) -> Cell {
    match (cell, alive) {
        (Cell::Dead, 3) => Cell::Alive,                      // Birth
        (Cell::Alive, n) if n <= 1 || n >= 4 => Cell::Dead,  // Death
        (state, _) => state,
    }
}
