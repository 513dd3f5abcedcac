//! Arithmetic mean of byte values.

/// Mean byte value of `block`, truncated toward zero.
///
/// Returns 0 for an empty block.
pub fn calculate_average(block: &[u8]) -> u8 {
    if block.is_empty() {
        return 0;
    }

    let sum: u64 = block.iter().map(|&b| u64::from(b)).sum();
    // The mean of bytes is always <= 255.
    (sum / block.len() as u64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x00)]
    #[case(0x41)]
    #[case(0xff)]
    fn test_constant_block_average(#[case] value: u8) {
        assert_eq!(calculate_average(&[value; 16]), value);
    }

    #[test]
    fn test_average_truncates() {
        // 1 + 2 = 3, 3 / 2 = 1
        assert_eq!(calculate_average(&[1, 2]), 1);
        assert_eq!(calculate_average(&[0, 0, 0, 255]), 63);
    }

    #[test]
    fn test_large_block_does_not_overflow() {
        let block = vec![0xffu8; 1 << 20];
        assert_eq!(calculate_average(&block), 0xff);
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(calculate_average(&[]), 0);
    }
}
