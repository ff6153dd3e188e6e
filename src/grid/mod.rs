//! Implements the compressed grid mapping active cells to the cartesian grid

mod compressed_grid;
pub use crate::grid::compressed_grid::*;
