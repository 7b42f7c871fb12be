// Tue Jan 13 2026 - Alex

pub mod error;
pub mod mmap;

pub use error::MemoryError;
pub use mmap::MappedFile;
