use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod column;
pub mod reader;

pub use column::{EntropySeries, load_column};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "column '{column}' not found in {} (available: {})",
        .path.display(),
        .available.join(", ")
    )]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: Vec<String>,
    },

    #[error("parse error in {} line {line}: '{value}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

/// The base ("true") and approximated series, read in that order.
#[derive(Debug, Clone)]
pub struct InputPair {
    pub base: EntropySeries,
    pub approx: EntropySeries,
}

/// Both files are fully read before any rendering starts.
pub fn load_input_pair(
    base_path: &Path,
    approx_path: &Path,
    column: &str,
) -> Result<InputPair, InputError> {
    let base = load_column(base_path, column)?;
    let approx = load_column(approx_path, column)?;

    tracing::info!(
        column = %base.column,
        base = %base.source.display(),
        approx = %approx.source.display(),
        base_rows = base.len(),
        approx_rows = approx.len(),
        "discovered input series"
    );

    Ok(InputPair { base, approx })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
