//! Implements the pressure-dependent black-oil fluid system

mod fluid_system;
pub use crate::fluid::fluid_system::*;
