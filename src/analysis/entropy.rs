//! Shannon entropy of a block and its 8-bit color encoding.

/// Multiplier applied to entropy (bits per byte) before truncating to a channel value.
pub const ENTROPY_SCALE: f64 = 32.0;

/// Count occurrences of every byte value in `data`.
pub fn byte_histogram(data: &[u8]) -> [u32; 256] {
    let mut counts = [0u32; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}

/// Calculate Shannon entropy for a byte slice.
///
/// `H = -sum(p * log2(p))` over the byte values present in `data`. Values
/// range from 0 (a single repeated byte) to 8 (all 256 values equally often).
/// An empty slice has entropy 0.
pub fn calculate_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let total = data.len() as f64;
    byte_histogram(data)
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Quantize entropy for an 8-bit channel: `floor(entropy * 32)`.
///
/// Results above 255 saturate. With 16-byte blocks entropy never exceeds 4, so
/// only blocks of 256+ bytes at full entropy (8 * 32 = 256) reach the clamp.
#[inline]
pub fn encode_entropy(entropy: f64) -> u8 {
    // Float-to-int `as` truncates toward zero and saturates at the bounds.
    (entropy * ENTROPY_SCALE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_entropy_constant_block() {
        assert_eq!(calculate_entropy(&[0x41; 16]), 0.0);
        assert_eq!(calculate_entropy(&[0u8; 4096]), 0.0);
    }

    #[test]
    fn test_entropy_sixteen_distinct_values() {
        let block: Vec<u8> = (100..116).collect();
        let entropy = calculate_entropy(&block);
        assert!((entropy - 4.0).abs() < 1e-12);
        assert_eq!(encode_entropy(entropy), 128);
    }

    #[test]
    fn test_entropy_two_symbols() {
        // Half zeros, half ones: exactly one bit.
        let block = [0u8, 1, 0, 1, 0, 1, 0, 1];
        assert!((calculate_entropy(&block) - 1.0).abs() < 1e-12);
        assert_eq!(encode_entropy(calculate_entropy(&block)), 32);
    }

    #[test]
    fn test_entropy_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        let entropy = calculate_entropy(&data);
        assert!((entropy - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_empty() {
        assert_eq!(calculate_entropy(&[]), 0.0);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.999, 31)]
    #[case(1.0, 32)]
    #[case(4.0, 128)]
    #[case(7.99, 255)]
    #[case(8.0, 255)]
    fn test_encode_entropy(#[case] entropy: f64, #[case] expected: u8) {
        assert_eq!(encode_entropy(entropy), expected);
    }

    #[test]
    fn test_full_entropy_block_saturates() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(encode_entropy(calculate_entropy(&data)), 255);
    }

    #[test]
    fn test_byte_histogram_counts() {
        let data: Vec<u8> = (0..1001).map(|i| (i * 17 + 31) as u8).collect();
        let counts = byte_histogram(&data);

        assert_eq!(counts.iter().sum::<u32>(), 1001);
        // 17 is odd, so every residue mod 256 appears; the first 233 values
        // of the cycle (1001 = 3 * 256 + 233) appear once more.
        assert_eq!(counts.iter().filter(|&&c| c == 4).count(), 233);
        assert_eq!(counts.iter().filter(|&&c| c == 3).count(), 23);
    }

    #[test]
    fn test_byte_histogram_empty() {
        assert_eq!(byte_histogram(&[]), [0u32; 256]);
    }
}
