//! In-memory tabular dataset

use admet_eval_common::{AdmetError, Result};

/// A named table of string cells with a header row.
///
/// Cells are kept as text; numeric coercion happens per endpoint during
/// evaluation so that malformed values become missing rather than errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers.
    ///
    /// `name` identifies the dataset in error messages (e.g. `Results file`).
    pub fn new<S: Into<String>>(name: impl Into<String>, headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from headers and rows in one go.
    pub fn from_rows<S, R, C>(
        name: impl Into<String>,
        headers: impl IntoIterator<Item = S>,
        rows: R,
    ) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut table = Self::new(name, headers);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row; its length must match the header.
    pub fn push_row<C: Into<String>>(&mut self, cells: impl IntoIterator<Item = C>) -> Result<()> {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(AdmetError::RaggedRow {
                dataset: self.name.clone(),
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Dataset name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the dataset.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether a column named `name` exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[col].as_str())
    }

    /// Cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Coerce a cell to a number, treating anything unparseable as missing.
///
/// Surrounding whitespace is ignored. `NaN` spellings count as missing;
/// infinities are kept.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
