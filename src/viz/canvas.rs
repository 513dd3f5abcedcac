//! Canvas sizing policy.
//!
//! The canvas is always a power-of-two square so it can hold a Hilbert curve,
//! which means the number of pixels (blocks) is always a power of four.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::hilbert::xy2d;

/// Smallest power of four strictly greater than `file_len / block_size`.
///
/// Returns `None` if the count does not fit in a `usize`, or if `block_size`
/// is zero.
pub fn block_count(file_len: usize, block_size: usize) -> Option<usize> {
    side_len(file_len, block_size).map(|side| side * side)
}

/// Side of the smallest square canvas whose block count `side * side`
/// satisfies `side * side * block_size > file_len`.
fn side_len(file_len: usize, block_size: usize) -> Option<usize> {
    if block_size == 0 {
        return None;
    }

    let mut side = 1usize;
    loop {
        let capacity = side.checked_mul(side)?.checked_mul(block_size)?;
        if capacity > file_len {
            return Some(side);
        }
        side = side.checked_mul(2)?;
    }
}

/// Dimensions of a canvas for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    /// Bytes summarized per pixel.
    pub block_size: usize,
    /// Number of blocks (pixels), a power of four.
    pub block_count: usize,
    /// Width and height of the canvas, `side_len * side_len == block_count`.
    pub side_len: u32,
}

impl CanvasGeometry {
    /// Compute the geometry for `file_len` bytes split into `block_size` blocks.
    pub fn compute(file_len: usize, block_size: usize) -> Result<Self> {
        let too_large = || Error::CanvasTooLarge {
            len: file_len,
            block_size,
        };

        let side = side_len(file_len, block_size).ok_or_else(too_large)?;
        let side_len = u32::try_from(side).map_err(|_| too_large())?;

        Ok(Self {
            block_size,
            block_count: side * side,
            side_len,
        })
    }

    /// Block index and byte range in the file behind pixel `(x, y)`.
    ///
    /// The range is clamped to `file_len`, so it is empty for padding pixels
    /// that lie past the end of the data. Returns `None` for coordinates
    /// outside the canvas.
    pub fn block_at(&self, x: u32, y: u32, file_len: usize) -> Option<(usize, Range<usize>)> {
        if x >= self.side_len || y >= self.side_len {
            return None;
        }

        let index = xy2d(u64::from(self.side_len), u64::from(x), u64::from(y)) as usize;
        let start = index.saturating_mul(self.block_size).min(file_len);
        let end = start.saturating_add(self.block_size).min(file_len);
        Some((index, start..end))
    }
}
