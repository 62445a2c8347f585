//! Error types for configuration and buffer loading.
//!
//! The scanner itself never fails: every malformed record is an output
//! variation, not an error. Everything here is raised before scanning starts.

use alloc::string::String;
use core::fmt;

/// Invalid configuration, detected before any byte of input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Target field index was 0 (fields are 1-based).
    ZeroField,
    /// The delimiter is the record terminator.
    DelimiterIsTerminator,
    /// No input file was given.
    MissingFile,
    /// The input file does not exist.
    FileNotFound(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroField => write!(f, "field must be higher than 0"),
            ConfigError::DelimiterIsTerminator => {
                write!(f, "delimiter cannot be the line terminator")
            }
            ConfigError::MissingFile => write!(f, "missing argument: file"),
            ConfigError::FileNotFound(path) => write!(f, "couldn't find file {}", path),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
pub use load::LoadError;

#[cfg(feature = "std")]
mod load {
    use std::fmt;
    use std::io;
    use std::path::PathBuf;

    /// Failure while reading a file into a [`Buffer`](crate::Buffer).
    #[derive(Debug)]
    pub enum LoadError {
        /// The file could not be opened.
        Open { path: PathBuf, source: io::Error },
        /// The file size could not be determined.
        Metadata { path: PathBuf, source: io::Error },
        /// The file does not fit in addressable memory, or the allocation failed.
        Allocation { size: u64 },
        /// Reading the file failed part way.
        Read { path: PathBuf, source: io::Error },
        /// Fewer bytes were read than the file size reported at open time.
        ShortRead { expected: usize, actual: usize },
    }

    impl fmt::Display for LoadError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                LoadError::Open { path, .. } => {
                    write!(f, "error reading file: {}", path.display())
                }
                LoadError::Metadata { path, .. } => {
                    write!(f, "couldn't get size of file {}", path.display())
                }
                LoadError::Allocation { size } => write!(f, "error allocating {} bytes", size),
                LoadError::Read { path, .. } => {
                    write!(f, "error reading file: {}", path.display())
                }
                LoadError::ShortRead { expected, actual } => write!(
                    f,
                    "buffer read less than filesize ({} of {} bytes)",
                    actual, expected
                ),
            }
        }
    }

    impl std::error::Error for LoadError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                LoadError::Open { source, .. }
                | LoadError::Metadata { source, .. }
                | LoadError::Read { source, .. } => Some(source),
                LoadError::Allocation { .. } | LoadError::ShortRead { .. } => None,
            }
        }
    }
}
