use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

/// One numeric column read from one CSV file, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropySeries {
    pub source: PathBuf,
    pub column: String,
    pub values: Vec<f64>,
}

impl EntropySeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reads `column` from a comma-delimited file with a header row.
///
/// Empty cells become `NaN` and are skipped when drawing. Any other value
/// that does not parse as `f64` is an error.
pub fn load_column(path: &Path, column: &str) -> Result<EntropySeries, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_err = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let idx = headers
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| InputError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;

    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let cell = record.get(idx).unwrap_or("");
        if cell.is_empty() {
            values.push(f64::NAN);
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| InputError::Parse {
            path: path.to_path_buf(),
            line,
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    tracing::debug!(
        path = %path.display(),
        column,
        rows = values.len(),
        "column loaded"
    );

    Ok(EntropySeries {
        source: path.to_path_buf(),
        column: column.to_string(),
        values,
    })
}
