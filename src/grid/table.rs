//! Tabular plot data loading collaborator
//!
//! Reads the companion per-plot dataset (variety, treatment, yield and
//! whatever else the trial records) from CSV, preserving row order so
//! rows can be paired positionally with grid cells.

use std::path::Path;

use log::info;

use crate::raster::errors::RasterResult;

/// An ordered table of named string columns
#[derive(Debug, Clone)]
pub struct PlotTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PlotTable {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        PlotTable { headers, rows }
    }

    /// Load a table from a CSV file, row order preserved
    pub fn from_csv_path(path: &Path) -> RasterResult<Self> {
        info!("Loading plot table from {}", path.display());

        let mut reader = csv::Reader::from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        info!(
            "Loaded plot table: {} columns, {} rows",
            headers.len(),
            rows.len()
        );

        Ok(PlotTable { headers, rows })
    }

    /// Column headers, in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
