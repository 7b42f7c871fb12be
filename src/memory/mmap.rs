// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A file mapped read-only into memory. Zero-length files are not mapped.
pub struct MappedFile {
    mmap: Option<Mmap>,
    path: PathBuf,
}

impl MappedFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let size = file.metadata()?.len();

        let mmap = if size == 0 {
            None
        } else {
            // The mapping is private to this process and only read through `&[u8]`.
            Some(unsafe { Mmap::map(&file) }?)
        };

        log::debug!("Mapped {} ({} bytes)", path.display(), size);
        Ok(Self { mmap, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Window of `len` bytes starting at `offset`; `None` runs to the end of
    /// the file.
    pub fn slice(&self, offset: usize, len: Option<usize>) -> Result<&[u8], MemoryError> {
        let data = self.as_slice();
        let size = data.len();
        let len = len.unwrap_or_else(|| size.saturating_sub(offset));

        match offset.checked_add(len) {
            Some(end) if offset <= size && end <= size => Ok(&data[offset..end]),
            _ => Err(MemoryError::OutOfBounds { offset, len, size }),
        }
    }
}
