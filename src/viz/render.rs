//! Assembling the canvas: one pixel per block, placed along a Hilbert curve.
//!
//! Two traversals produce the same image:
//! - sequential: walk block indices and map each to its pixel with `d2xy`
//! - parallel: walk pixels with rayon and map each back to its block with `xy2d`
//!
//! Every pixel belongs to exactly one block, so the parallel traversal writes
//! disjoint 4-byte slots without any locking.

use std::num::NonZeroUsize;
use std::time::Instant;

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::analysis::{get_block, BlockStats, DEFAULT_BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::hilbert::{d2xy, xy2d};
use crate::report::{NullReporter, Reporter};
use crate::viz::{block_color, CanvasGeometry};

/// Options for building a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Bytes summarized by each pixel.
    pub block_size: NonZeroUsize,
    /// Spread the per-block work over the rayon thread pool.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_size: NonZeroUsize::new(DEFAULT_BLOCK_SIZE).unwrap_or(NonZeroUsize::MIN),
            parallel: true,
        }
    }
}

/// Render `data` with the default options and no diagnostics.
pub fn render(data: &[u8]) -> Result<RgbaImage> {
    render_with(data, &RenderOptions::default(), &mut NullReporter)
}

/// Render `data` into a `side_len x side_len` RGBA canvas.
///
/// Fails with [`Error::EmptyInput`] before doing anything else if `data` is
/// empty. Once the geometry is known, every block is processed; there is no
/// per-block failure.
pub fn render_with(
    data: &[u8],
    options: &RenderOptions,
    reporter: &mut dyn Reporter,
) -> Result<RgbaImage> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    reporter.input_size(data.len());

    let geometry = CanvasGeometry::compute(data.len(), options.block_size.get())?;
    reporter.geometry(&geometry);
    log::debug!(
        "canvas {0}x{0} for {1} blocks of {2} bytes",
        geometry.side_len,
        geometry.block_count,
        geometry.block_size
    );

    let start = Instant::now();
    let image = if options.parallel {
        render_parallel(data, &geometry)
    } else {
        render_sequential(data, &geometry)
    };
    log::debug!(
        "rendered {} blocks in {:?} (parallel: {})",
        geometry.block_count,
        start.elapsed(),
        options.parallel
    );

    Ok(image)
}

/// Colors blocks of one input, reusing a single color for every padding block.
struct BlockPainter<'a> {
    data: &'a [u8],
    block_size: usize,
    padding: Rgba<u8>,
}

impl<'a> BlockPainter<'a> {
    fn new(data: &'a [u8], block_size: usize) -> Self {
        // Blocks past the end of the data are all zeros and share one color.
        let zeros = vec![0u8; block_size];
        Self {
            data,
            block_size,
            padding: block_color(&BlockStats::of(&zeros)),
        }
    }

    #[inline]
    fn is_padding(&self, index: usize) -> bool {
        index
            .checked_mul(self.block_size)
            .map_or(true, |offset| offset >= self.data.len())
    }

    #[inline]
    fn color(&self, index: usize) -> Rgba<u8> {
        if self.is_padding(index) {
            return self.padding;
        }
        let block = get_block(self.data, index, self.block_size);
        block_color(&BlockStats::of(&block))
    }
}

fn render_sequential(data: &[u8], geometry: &CanvasGeometry) -> RgbaImage {
    let side = u64::from(geometry.side_len);
    let painter = BlockPainter::new(data, geometry.block_size);
    let mut image = RgbaImage::new(geometry.side_len, geometry.side_len);

    for index in 0..geometry.block_count {
        let (x, y) = d2xy(side, index as u64);
        image.put_pixel(x as u32, y as u32, painter.color(index));
    }

    image
}

fn render_parallel(data: &[u8], geometry: &CanvasGeometry) -> RgbaImage {
    let side = geometry.side_len as usize;
    let painter = BlockPainter::new(data, geometry.block_size);
    let mut image = RgbaImage::new(geometry.side_len, geometry.side_len);
    let pixels: &mut [u8] = &mut image;

    pixels
        .par_chunks_exact_mut(4)
        .enumerate()
        .for_each(|(pixel, slot)| {
            let x = (pixel % side) as u64;
            let y = (pixel / side) as u64;
            let index = xy2d(side as u64, x, y) as usize;
            slot.copy_from_slice(&painter.color(index).0);
        });

    image
}
