//! Field extraction over a loaded buffer.
//!
//! A record is the run of bytes up to the next `\n` or the end of the buffer.
//! For every record the scanner walks forward counting delimiters until it
//! reaches the target field, takes the bytes up to the next delimiter or
//! record end, then skips to the start of the next record. Every record
//! produces exactly one [`Field`], so output lines line up with input lines.
//!
//! ```
//! use fieldcut::{extract_fields, Field, FieldSpec};
//!
//! let spec = FieldSpec::csv(2).unwrap();
//! let fields: Vec<Field> = extract_fields(b"a,,c\nshort\n", &spec).collect();
//!
//! assert_eq!(fields, vec![Field::Present(b""), Field::Missing]);
//! ```

use crate::config::FieldSpec;
use crate::cursor::ByteCursor;

/// The target field of one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field<'a> {
    /// The record has the target field (possibly zero-length).
    Present(&'a [u8]),
    /// The record has fewer fields than the target.
    Missing,
}

impl<'a> Field<'a> {
    /// Bytes to emit for this record. A missing field is emitted as empty.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Field::Present(bytes) => bytes,
            Field::Missing => &[],
        }
    }

    /// True if the record was too short to have the target field.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

/// Iterator over the target field of every record, in record order.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    cursor: ByteCursor<'a>,
    spec: FieldSpec,
}

impl<'a> Fields<'a> {
    /// Create a field iterator over `text`.
    pub fn new(text: &'a [u8], spec: &FieldSpec) -> Self {
        Self {
            cursor: ByteCursor::new(text),
            spec: *spec,
        }
    }

    /// Walk from the record start to the beginning of the target field.
    ///
    /// Returns false if the record ends (terminator or end of data) first.
    /// The cursor is left on the terminator in that case.
    fn seek_target(&mut self) -> bool {
        let delimiter = self.spec.delimiter();
        let newline = self.spec.newline();
        let target = self.spec.field();

        let mut current_field = 1;
        while current_field < target {
            match self.cursor.peek() {
                None => return false,
                Some(b) if b == newline => return false,
                Some(b) => {
                    if b == delimiter {
                        current_field += 1;
                    }
                    self.cursor.advance();
                }
            }
        }
        true
    }

    /// Move past the rest of the current record and its terminator.
    fn finish_record(&mut self) {
        let newline = self.spec.newline();
        self.cursor.advance_until(|b| b == newline);
        self.cursor.advance();
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.at_end() {
            return None;
        }

        let field = if self.seek_target() {
            let delimiter = self.spec.delimiter();
            let newline = self.spec.newline();
            let start = self.cursor.position();
            let end = self
                .cursor
                .advance_until(|b| b == delimiter || b == newline);
            Field::Present(self.cursor.slice(start, end))
        } else {
            Field::Missing
        };

        self.finish_record();
        Some(field)
    }
}

impl core::iter::FusedIterator for Fields<'_> {}

/// Iterate over the target field of every record in `text`.
pub fn extract_fields<'a>(text: &'a [u8], spec: &FieldSpec) -> Fields<'a> {
    Fields::new(text, spec)
}

/// Counts collected while writing fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Records scanned (= output lines written).
    pub records: usize,
    /// Records that did not have the target field.
    pub missing: usize,
}

/// Write the target field of every record to `out`, one line per record.
///
/// Fields are written as they are found; the only errors are those of `out`.
#[cfg(feature = "std")]
pub fn write_fields<W: std::io::Write>(
    text: &[u8],
    spec: &FieldSpec,
    mut out: W,
) -> std::io::Result<ScanStats> {
    let mut stats = ScanStats::default();
    for field in extract_fields(text, spec) {
        out.write_all(field.as_bytes())?;
        out.write_all(b"\n")?;
        stats.records += 1;
        if field.is_missing() {
            stats.missing += 1;
        }
    }
    out.flush()?;
    Ok(stats)
}
