//! Implements the property deck holding raw grid arrays and keyword tables

mod property_deck;
mod samples;
mod tables;
pub use crate::deck::property_deck::*;
pub use crate::deck::samples::*;
pub use crate::deck::tables::*;
