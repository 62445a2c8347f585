//! Configuration for field extraction.

use core::num::NonZeroUsize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default field delimiter (tab).
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Default target field (1-based).
pub const DEFAULT_FIELD: usize = 2;

/// Byte that ends a record.
pub const RECORD_TERMINATOR: u8 = b'\n';

const DEFAULT_FIELD_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_FIELD) {
    Some(n) => n,
    None => unreachable!(),
};

/// Which field to pull out of each record, and how records are split.
///
/// With the `serde` feature, deserialization goes through [`FieldSpec::new`],
/// so only `delimiter` and `field` are read and both are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawFieldSpec", into = "RawFieldSpec")
)]
pub struct FieldSpec {
    /// Field delimiter (default: b'\t')
    delimiter: u8,
    /// Target field, 1-based (default: 2)
    field: NonZeroUsize,
    /// Record delimiter (always b'\n')
    newline: u8,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            field: DEFAULT_FIELD_NZ,
            newline: RECORD_TERMINATOR,
        }
    }
}

impl FieldSpec {
    /// Create a field spec, rejecting field 0 and a delimiter equal to the
    /// record terminator.
    pub fn new(delimiter: u8, field: usize) -> Result<Self, ConfigError> {
        let field = NonZeroUsize::new(field).ok_or(ConfigError::ZeroField)?;
        if delimiter == RECORD_TERMINATOR {
            return Err(ConfigError::DelimiterIsTerminator);
        }
        Ok(Self {
            delimiter,
            field,
            newline: RECORD_TERMINATOR,
        })
    }

    /// Tab-separated field spec.
    pub fn tsv(field: usize) -> Result<Self, ConfigError> {
        Self::new(b'\t', field)
    }

    /// Comma-separated field spec.
    pub fn csv(field: usize) -> Result<Self, ConfigError> {
        Self::new(b',', field)
    }

    /// Field delimiter byte.
    #[inline]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Target field index, 1-based.
    #[inline]
    pub fn field(&self) -> usize {
        self.field.get()
    }

    /// Record terminator byte.
    #[inline]
    pub fn newline(&self) -> u8 {
        self.newline
    }
}

/// Serialized form of [`FieldSpec`]. The record terminator is fixed and not stored.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawFieldSpec {
    delimiter: u8,
    field: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldSpec> for FieldSpec {
    type Error = ConfigError;

    fn try_from(raw: RawFieldSpec) -> Result<Self, Self::Error> {
        FieldSpec::new(raw.delimiter, raw.field)
    }
}

#[cfg(feature = "serde")]
impl From<FieldSpec> for RawFieldSpec {
    fn from(spec: FieldSpec) -> Self {
        Self {
            delimiter: spec.delimiter(),
            field: spec.field(),
        }
    }
}

#[cfg(feature = "std")]
pub use run::{Config, ConfigReport};

#[cfg(feature = "std")]
mod run {
    use std::fmt;
    use std::path::{Path, PathBuf};

    use super::FieldSpec;
    use crate::error::ConfigError;

    /// Fully resolved run configuration.
    ///
    /// Built once from the command line and read-only afterwards.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Config {
        spec: FieldSpec,
        path: PathBuf,
        verbose: bool,
    }

    impl Config {
        /// Validate and build a run configuration.
        ///
        /// The path must be non-empty and point at an existing file.
        pub fn new(
            path: impl Into<PathBuf>,
            spec: FieldSpec,
            verbose: bool,
        ) -> Result<Self, ConfigError> {
            let path = path.into();
            if path.as_os_str().is_empty() {
                return Err(ConfigError::MissingFile);
            }
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Ok(Self {
                spec,
                path,
                verbose,
            })
        }

        /// Field selection for the scanner.
        pub fn spec(&self) -> &FieldSpec {
            &self.spec
        }

        /// Input file path.
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Whether `-l` was given.
        pub fn verbose(&self) -> bool {
            self.verbose
        }

        /// Printable summary of this configuration for a file of `filesize` bytes.
        pub fn report(&self, filesize: usize) -> ConfigReport<'_> {
            ConfigReport {
                config: self,
                filesize,
            }
        }
    }

    /// Tab-indented configuration block shown in verbose mode.
    pub struct ConfigReport<'a> {
        config: &'a Config,
        filesize: usize,
    }

    impl fmt::Display for ConfigReport<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let spec = self.config.spec();
            writeln!(f, "\tdelimiter: {}", escape_byte(spec.delimiter()))?;
            writeln!(f, "\tfile: {}", self.config.path().display())?;
            writeln!(f, "\tfilesize: {}", self.filesize)?;
            writeln!(f, "\tlogger: {}", u8::from(self.config.verbose()))?;
            writeln!(f, "\ttarget field: {}", spec.field())
        }
    }

    fn escape_byte(byte: u8) -> String {
        match byte {
            b'\t' => "\\t".to_string(),
            b'\n' => "\\n".to_string(),
            _ => std::ascii::escape_default(byte).to_string(),
        }
    }
}
