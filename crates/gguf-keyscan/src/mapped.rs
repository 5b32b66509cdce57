//! Read-only memory-mapped view of a GGUF file.

use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::filter::KeyFilter;
use crate::scanner::{ScanResult, scan_bytes};
use crate::types::{Result, ScanError};

/// File contents exposed as a byte slice.
///
/// The mapping is released when the value is dropped.
pub struct MappedSource {
    // `None` for empty files, which cannot be mapped on every platform.
    mmap: Option<Mmap>,
}

impl MappedSource {
    pub fn open(path: &Path) -> Result<Self> {
        let io_err = |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            debug!(path = %path.display(), "empty file, nothing to map");
            return Ok(Self { mmap: None });
        }

        // SAFETY: the mapping is read-only and never outlives `self`. The
        // file must not be truncated by another process while it is mapped.
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        debug!(path = %path.display(), len, "mapped gguf file");
        Ok(Self { mmap: Some(mmap) })
    }
}

impl Deref for MappedSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

/// Map `path` and report the metadata keys that match `filter`.
pub fn scan_file(path: &Path, filter: &KeyFilter) -> Result<ScanResult> {
    let source = MappedSource::open(path)?;
    scan_bytes(&source, filter)
}
