//! Slicing the raw input into fixed-size blocks.

use std::borrow::Cow;

/// Bytes summarized by a single pixel.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Get the bytes of block `index`.
///
/// - A block starting at or past the end of `data` is `block_size` zero bytes.
/// - A block reaching the end of `data` (`offset + block_size >= len`) is the
///   tail slice, which may be shorter than `block_size`.
/// - Any other block is exactly `block_size` bytes borrowed from `data`.
///
/// Note the tail rule uses `>=`: a block that ends exactly at the end of the
/// data also takes the tail branch.
pub fn get_block(data: &[u8], index: usize, block_size: usize) -> Cow<'_, [u8]> {
    let offset = match index.checked_mul(block_size) {
        Some(offset) if offset < data.len() => offset,
        _ => return Cow::Owned(vec![0u8; block_size]),
    };

    if offset + block_size >= data.len() {
        Cow::Borrowed(&data[offset..])
    } else {
        Cow::Borrowed(&data[offset..offset + block_size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_buffer_is_returned_whole() {
        let data = [1u8, 2, 3, 4, 5];
        let block = get_block(&data, 0, DEFAULT_BLOCK_SIZE);
        assert_eq!(&*block, &data[..]);
        assert!(matches!(block, Cow::Borrowed(_)));
    }

    #[test]
    fn test_block_past_end_is_zeroed() {
        let data = [0xffu8; 20];
        let block = get_block(&data, 2, DEFAULT_BLOCK_SIZE);
        assert_eq!(block.len(), DEFAULT_BLOCK_SIZE);
        assert!(block.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_offset_exactly_at_end_is_zeroed() {
        let data = [7u8; 32];
        let block = get_block(&data, 2, 16);
        assert_eq!(&*block, &[0u8; 16][..]);
    }

    #[test]
    fn test_full_interior_block() {
        let data: Vec<u8> = (0..64).collect();
        let block = get_block(&data, 1, 16);
        assert_eq!(&*block, &data[16..32]);
    }

    #[test]
    fn test_block_ending_at_end_takes_tail() {
        let data: Vec<u8> = (0..32).collect();
        let block = get_block(&data, 1, 16);
        assert_eq!(&*block, &data[16..]);
        assert_eq!(block.len(), 16);
    }

    #[test]
    fn test_partial_tail_block() {
        let data: Vec<u8> = (0..40).collect();
        let block = get_block(&data, 2, 16);
        assert_eq!(&*block, &data[32..40]);
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        let data = [1u8; 4];
        let block = get_block(&data, usize::MAX, 16);
        assert_eq!(block.len(), 16);
    }
}
