//! Mathematical utilities: least squares and evenly spaced grids.

pub mod grid;
pub mod ols;

pub use grid::*;
pub use ols::*;
