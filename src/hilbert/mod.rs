//! Hilbert curve coordinate transformations.
//!
//! Blocks of the input are laid out along a Hilbert curve so that bytes that
//! are close together in the file stay close together on the canvas.

pub mod curve;

pub use curve::{d2xy, is_valid_order, xy2d};
