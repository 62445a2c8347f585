//! # Fieldcut
//!
//! Extract a single delimiter-separated field from every line of a text buffer.
//!
//! The crate is a minimal `cut -f`: a whole file is loaded into one owned
//! [`Buffer`], then the [`scanner`] walks it once with a bounded
//! [`ByteCursor`] and yields the target field of every record, in order.
//!
//! ## Module Organization
//!
//! - [`config`] - Field selection ([`FieldSpec`]) and run configuration ([`Config`])
//! - [`cursor`] - Bounded byte cursor used by the scanner
//! - [`scanner`] - Per-record field extraction
//! - [`buffer`] - Whole-file loading into an owned buffer
//! - [`error`] - Configuration and loading errors
//!
//! ## Quick Start
//!
//! ```
//! use fieldcut::{extract_fields, FieldSpec};
//!
//! let text = b"a\tb\tc\n1\t2\t3\n";
//! let spec = FieldSpec::tsv(2).unwrap();
//!
//! let fields: Vec<&[u8]> = extract_fields(text, &spec).map(|f| f.as_bytes()).collect();
//! assert_eq!(fields, vec![b"b".as_slice(), b"2".as_slice()]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - File loading, the output writer and `std::error::Error` impls
//! - `serde` - Enable serialization/deserialization of [`FieldSpec`]
//! - `cli` (default) - The `fieldcut` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

/// Field selection and run configuration.
pub mod config;

/// Bounded cursor over a byte slice.
pub mod cursor;

/// Configuration and loading errors.
pub mod error;

/// Per-record field extraction.
pub mod scanner;

/// Whole-file loading.
#[cfg(feature = "std")]
pub mod buffer;

// =============================================================================
// Public re-exports
// =============================================================================

pub use config::{FieldSpec, DEFAULT_DELIMITER, DEFAULT_FIELD, RECORD_TERMINATOR};
pub use cursor::ByteCursor;
pub use error::ConfigError;
pub use scanner::{extract_fields, Field, Fields, ScanStats};

#[cfg(feature = "std")]
pub use buffer::Buffer;
#[cfg(feature = "std")]
pub use config::{Config, ConfigReport};
#[cfg(feature = "std")]
pub use error::LoadError;
#[cfg(feature = "std")]
pub use scanner::write_fields;
