// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Out of bounds: {len} bytes at offset 0x{offset:x} exceed size 0x{size:x}")]
    OutOfBounds { offset: usize, len: usize, size: usize },
}
