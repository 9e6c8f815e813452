//! Result table shared by all extraction routines

use crate::ScrapeError;

/// Ordered rows of text fields with a header row
///
/// Every data row has exactly as many fields as the header; `push` rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column names
    pub fn new<const N: usize>(header: [&str; N]) -> Self {
        Self {
            header: header.iter().map(|name| name.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Row appended
    /// * `Err(ScrapeError::RowArity)` - Row width differs from the header
    pub fn push(&mut self, row: Vec<String>) -> Result<(), ScrapeError> {
        if row.len() != self.header.len() {
            return Err(ScrapeError::RowArity {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, header excluded
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over every row, header first
    pub fn all_rows(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}
