//! Table data structure: ordered, named, row-aligned numeric columns.

use crate::error::{AnalysisError, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Layout of the values passed to [`Table::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueLayout {
    /// Each inner vector is a column (column-major).
    #[default]
    Column,
    /// Each inner vector is a row across all columns (row-major).
    Row,
}

/// An in-memory table of numeric columns.
///
/// Columns keep their insertion order and all have the same length.
/// Missing values are stored as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    /// Values stored in column-major format: columns[column][row]
    columns: Vec<Vec<f64>>,
    n_rows: usize,
}

/// Builder for constructing a [`Table`] one column at a time.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named column.
    pub fn column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.names.push(name.into());
        self.columns.push(values);
        self
    }

    pub fn build(self) -> Result<Table> {
        Table::new(self.names, self.columns, ValueLayout::Column)
    }
}

impl Table {
    /// Create a table from column names and values in the given layout.
    ///
    /// Fails if names repeat, if the number of names does not match the
    /// number of columns, or if any column/row has the wrong length.
    pub fn new(names: Vec<String>, values: Vec<Vec<f64>>, layout: ValueLayout) -> Result<Self> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(AnalysisError::DuplicateColumn(name.clone()));
            }
        }

        let columns = match layout {
            ValueLayout::Column => {
                if values.len() != names.len() {
                    return Err(AnalysisError::DimensionMismatch {
                        column: "<header>".to_string(),
                        expected: names.len(),
                        got: values.len(),
                    });
                }
                values
            }
            ValueLayout::Row => {
                for row in &values {
                    if row.len() != names.len() {
                        return Err(AnalysisError::DimensionMismatch {
                            column: "<row>".to_string(),
                            expected: names.len(),
                            got: row.len(),
                        });
                    }
                }
                // Transpose to column-major
                (0..names.len())
                    .map(|c| values.iter().map(|row| row[c]).collect())
                    .collect()
            }
        };

        let n_rows = columns.first().map(Vec::len).unwrap_or(0);
        for (name, column) in names.iter().zip(&columns) {
            if column.len() != n_rows {
                return Err(AnalysisError::DimensionMismatch {
                    column: name.clone(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        Ok(Self {
            names,
            columns,
            n_rows,
        })
    }

    /// Create a table from row-major data.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(names, rows, ValueLayout::Row)
    }

    /// Load a table from CSV with a header row.
    ///
    /// Empty cells, `NA` and `NaN` are read as missing values.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if names.is_empty() {
            return Err(AnalysisError::EmptyData);
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = names
                .iter()
                .zip(record.iter())
                .map(|(name, cell)| {
                    parse_cell(cell).ok_or_else(|| AnalysisError::Parse {
                        row: index + 1,
                        column: name.clone(),
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        Self::from_rows(names, rows)
    }

    /// Load a table from CSV text.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_csv_reader(csv_data.as_bytes())
    }

    /// Load a table from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.n_rows == 0
    }

    /// Column names in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| AnalysisError::UnknownFeature(name.to_string()))
    }

    /// Iterate over `(name, values)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Build a new table by applying `f` to every column.
    ///
    /// `f` must preserve column length.
    pub fn map_columns<F>(&self, mut f: F) -> Table
    where
        F: FnMut(&str, &[f64]) -> Vec<f64>,
    {
        let columns: Vec<Vec<f64>> = self.iter().map(|(name, values)| f(name, values)).collect();
        debug_assert!(columns.iter().all(|c| c.len() == self.n_rows));
        Table {
            names: self.names.clone(),
            columns,
            n_rows: self.n_rows,
        }
    }

    /// Check if any column holds missing values (NaN or Inf).
    pub fn has_missing_values(&self) -> bool {
        self.columns
            .iter()
            .any(|col| col.iter().any(|v| !v.is_finite()))
    }
}

fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    cell.parse().ok()
}
