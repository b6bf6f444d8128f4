//! Random-access byte sources.
//!
//! Every read is addressed by an explicit offset. No component relies on a
//! shared stream position, so stages may revisit any region of the input.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{ElfError, ElfResult};

/// A read-only, offset-addressed view of an ELF object.
pub trait ByteSource {
    /// Total length of the source in bytes.
    fn len(&self) -> u64;

    /// Fill `buf` with the bytes starting at `offset`.
    ///
    /// Implementations must fail with [`ElfError::Truncated`] rather than
    /// return a short read.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> ElfResult<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that `[offset, offset + size)` lies inside the source.
    fn check_span(&self, what: &str, offset: u64, size: u64) -> ElfResult<()> {
        let available = self.len();
        match offset.checked_add(size) {
            Some(end) if end <= available => Ok(()),
            _ => Err(ElfError::Truncated {
                what: what.to_string(),
                offset,
                needed: size,
                available: available.saturating_sub(offset),
            }),
        }
    }

    /// Read `size` bytes at `offset` into a fresh buffer.
    fn read_vec(&self, what: &str, offset: u64, size: u64) -> ElfResult<Vec<u8>> {
        self.check_span(what, offset, size)?;
        let len = usize::try_from(size).map_err(|_| ElfError::Truncated {
            what: what.to_string(),
            offset,
            needed: size,
            available: self.len().saturating_sub(offset),
        })?;
        let mut buf = vec![0u8; len];
        self.read_exact_at(offset, &mut buf)?;
        Ok(buf)
    }
}

impl ByteSource for [u8] {
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> ElfResult<()> {
        let truncated = || ElfError::Truncated {
            what: "read".to_string(),
            offset,
            needed: buf.len() as u64,
            available: (<[u8]>::len(self) as u64).saturating_sub(offset),
        };
        let start = usize::try_from(offset).map_err(|_| truncated())?;
        let end = start.checked_add(buf.len()).ok_or_else(truncated)?;
        let bytes = self.get(start..end).ok_or_else(truncated)?;
        buf.copy_from_slice(bytes);
        Ok(())
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> u64 {
        self.as_slice().len() as u64
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> ElfResult<()> {
        self.as_slice().read_exact_at(offset, buf)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn len(&self) -> u64 {
        (**self).len()
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> ElfResult<()> {
        (**self).read_exact_at(offset, buf)
    }
}

/// A file-backed source.
///
/// Seek and read happen under one lock so that an offset is never observed
/// by another reader of the same handle.
#[derive(Debug)]
pub struct FileSource {
    file: Mutex<File>,
    len: u64,
    path: PathBuf,
}

impl FileSource {
    /// Open `path` read-only and record its length.
    pub fn open(path: impl AsRef<Path>) -> ElfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            file: Mutex::new(file),
            len,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> ElfResult<()> {
        self.check_span("read", offset, buf.len() as u64)?;
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf)?;
        Ok(())
    }
}
