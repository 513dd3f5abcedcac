//! Error type shared by every stage of the pipeline.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The source contained no bytes, so there is nothing to lay out.
    #[error("Empty file")]
    EmptyInput,

    /// Reading the input or creating/writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The pixel buffer could not be serialized as PNG.
    #[error("Image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),

    /// The block count or side length for `len` bytes overflows the sizing arithmetic.
    #[error("Canvas size for {len} bytes at block size {block_size} overflows")]
    CanvasTooLarge { len: usize, block_size: usize },
}
