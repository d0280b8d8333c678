//! Track module: the immutable track value and its line rendering.
//!
//! A `Track` is a plain owned value; a playlist takes ownership on insert,
//! so a stored track can never be changed through a caller-held handle.

mod display;
mod model;

pub use display::{display_from_fields, format_mmss};
pub use model::*;

#[cfg(test)]
mod tests;
