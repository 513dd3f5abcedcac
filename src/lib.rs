//! binvis - binary file visualizer.
//!
//! Splits a file into fixed-size blocks and renders one pixel per block:
//! - red: Shannon entropy of the block, scaled by 32
//! - green: average byte value of the block
//!
//! Pixels are laid out along a Hilbert curve so neighboring regions of the
//! file stay neighbors on the canvas.

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions
)]

pub mod analysis;
pub mod cli;
pub mod error;
pub mod hilbert;
pub mod io;
pub mod report;
pub mod util;
pub mod viz;

pub use error::{Error, Result};
pub use io::{load_file, visualize_file, write_png, FileData};
pub use report::{NullReporter, Reporter, TextReporter};
pub use viz::{render, render_with, CanvasGeometry, RenderOptions};
