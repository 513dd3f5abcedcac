//! Progress diagnostics emitted while building a canvas.
//!
//! The renderer never writes to the console itself. It hands its diagnostics to
//! a [`Reporter`], so callers decide whether they are printed, recorded or
//! dropped.

use std::io::{self, Write};

use crate::viz::CanvasGeometry;

/// Observer for the diagnostics of a render.
pub trait Reporter {
    /// Called once the input has been accepted as non-empty.
    fn input_size(&mut self, _len: usize) {}

    /// Called once the canvas geometry has been computed.
    fn geometry(&mut self, _geometry: &CanvasGeometry) {}
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Writes diagnostics as plain text lines.
///
/// ```text
/// Data: 1000 bytes
/// Block size: 16
/// Block count: 64
/// Side length: 8
/// ```
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
}

impl TextReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn input_size(&mut self, len: usize) {
        let _ = writeln!(self.out, "Data: {len} bytes");
    }

    fn geometry(&mut self, geometry: &CanvasGeometry) {
        let _ = writeln!(self.out, "Block size: {}", geometry.block_size);
        let _ = writeln!(self.out, "Block count: {}", geometry.block_count);
        let _ = writeln!(self.out, "Side length: {}", geometry.side_len);
    }
}
