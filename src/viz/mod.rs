//! Canvas construction: geometry, pixel colors and the Hilbert renderer.

pub mod canvas;
pub mod color;
pub mod render;

pub use canvas::{block_count, CanvasGeometry};
pub use color::block_color;
pub use render::{render, render_with, RenderOptions};
