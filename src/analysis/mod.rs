//! Per-block analysis: slicing the input into blocks and summarizing each one.
//!
//! This module provides:
//! - Block extraction with zero-filled blocks past the end of the data
//! - Shannon entropy and its 8-bit encoding
//! - Truncated arithmetic mean of byte values

pub mod average;
pub mod block;
pub mod entropy;

pub use average::calculate_average;
pub use block::{get_block, DEFAULT_BLOCK_SIZE};
pub use entropy::{byte_histogram, calculate_entropy, encode_entropy, ENTROPY_SCALE};

/// Statistics of a single block, as used to color its pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStats {
    /// Shannon entropy in bits per byte, 0.0 - 8.0.
    pub entropy: f64,
    /// Truncated mean of the byte values.
    pub average: u8,
}

impl BlockStats {
    /// Compute both statistics for a block.
    pub fn of(block: &[u8]) -> Self {
        Self {
            entropy: calculate_entropy(block),
            average: calculate_average(block),
        }
    }

    /// Entropy quantized for an 8-bit color channel.
    #[inline]
    pub fn encoded_entropy(&self) -> u8 {
        encode_entropy(self.entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_constant_block() {
        let stats = BlockStats::of(&[0x41; 16]);
        assert_eq!(stats.entropy, 0.0);
        assert_eq!(stats.average, 0x41);
        assert_eq!(stats.encoded_entropy(), 0);
    }

    #[test]
    fn test_stats_of_distinct_block() {
        let block: Vec<u8> = (0..16).collect();
        let stats = BlockStats::of(&block);
        assert_eq!(stats.encoded_entropy(), 128);
        // (0 + 1 + ... + 15) / 16 = 120 / 16 = 7 (truncated)
        assert_eq!(stats.average, 7);
    }
}
