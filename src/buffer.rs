//! Whole-file loading into an owned, immutable buffer.

use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

use crate::error::LoadError;

/// The complete contents of one input file.
///
/// The length is fixed at load time and the bytes are never mutated.
/// Dropping the buffer releases the memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    bytes: Box<[u8]>,
}

impl Buffer {
    /// Read `path` completely into memory.
    ///
    /// The file size is taken from metadata when the file is opened; reading
    /// fewer bytes than that is a [`LoadError::ShortRead`]. Bytes appended
    /// to the file after it was opened are not read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let filesize = file
            .metadata()
            .map_err(|source| LoadError::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let bytes = read_sized(file, filesize, path)?;

        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Wrap bytes that are already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Exact byte length.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for an empty input file.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read exactly `filesize` bytes from `reader` into a vector reserved up front.
///
/// Fails with [`LoadError::Allocation`] if the reservation cannot be made and
/// with [`LoadError::ShortRead`] if the reader ends early.
fn read_sized<R: Read>(reader: R, filesize: u64, path: &Path) -> Result<Vec<u8>, LoadError> {
    let expected =
        usize::try_from(filesize).map_err(|_| LoadError::Allocation { size: filesize })?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(expected)
        .map_err(|_| LoadError::Allocation { size: filesize })?;

    reader
        .take(filesize)
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if bytes.len() != expected {
        return Err(LoadError::ShortRead {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
