/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod base;
mod deck;
mod fluid;
mod grid;
mod material;
mod simulation;
pub use crate::base::*;
pub use crate::deck::*;
pub use crate::fluid::*;
pub use crate::grid::*;
pub use crate::material::*;
pub use crate::simulation::*;
