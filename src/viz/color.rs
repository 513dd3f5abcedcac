//! Pixel color for a block.

use image::Rgba;

use crate::analysis::BlockStats;

/// Color of a block's pixel: red is encoded entropy, green is the average
/// byte value, blue is unused and alpha is opaque.
#[inline]
pub fn block_color(stats: &BlockStats) -> Rgba<u8> {
    Rgba([stats.encoded_entropy(), stats.average, 0, 255])
}
