//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`LifeBoard`] owns two equally sized [`Grid`]s and alternates which one is
//! read and which one is written on every generation. A rendering or input
//! driver calls [`LifeBoard::update`] on a timer and paints
//! [`LifeBoard::grid`].

pub mod board;
pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;

pub use board::LifeBoard;
pub use cell::Cell;
pub use error::{BoardError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
