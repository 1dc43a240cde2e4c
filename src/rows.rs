use std::{fs::File, io::Read, mem, path::Path};

use crate::{decode::decode_table, AwqlError, Result, Table};

/// Forward-only cursor over a downloaded report.
///
/// Row 0 of the table is the header; reading starts at row 1. A report with
/// no data rows yields an empty cursor without columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rows {
    position: usize,
    size: usize,
    table: Table,
}

impl Rows {
    /// Wraps a parsed table, header row first.
    pub fn new(table: Table) -> Self {
        if table.len() > 1 {
            Self {
                position: 1,
                size: table.len(),
                table,
            }
        } else {
            Self::default()
        }
    }

    /// Parses a CSV payload already held in memory.
    pub fn from_csv(payload: &str) -> Result<Self> {
        Self::from_reader(payload.as_bytes())
    }

    /// Parses a CSV payload from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        decode_table(reader).map(Self::new)
    }

    /// Parses a CSV payload previously saved to disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Column names, taken verbatim from the header row.
    pub fn columns(&self) -> &[String] {
        self.table.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of data rows not read yet.
    pub fn remaining(&self) -> usize {
        self.size - self.position
    }

    /// Copies the current row into `dest` and advances.
    ///
    /// `dest` must be sized to [`Rows::columns`]. Returns
    /// [`AwqlError::EndOfData`] once exhausted, leaving `dest` untouched.
    pub fn next_into(&mut self, dest: &mut [String]) -> Result<()> {
        if self.position == self.size {
            return Err(AwqlError::EndOfData);
        }
        let row = &self.table[self.position];
        if row.len() != dest.len() {
            return Err(AwqlError::ColumnMismatch {
                expected: row.len(),
                actual: dest.len(),
            });
        }
        dest.clone_from_slice(row);
        self.position += 1;
        Ok(())
    }

    /// Nothing to release; the table lives in memory.
    pub fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Iterator for Rows {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.size {
            return None;
        }
        let row = mem::take(&mut self.table[self.position]);
        self.position += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Rows {}
