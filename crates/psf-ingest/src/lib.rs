//! Delimited-file ingestion.
//!
//! Reads a PSF extract into a [`Dataset`] of typed records. All cell values
//! stay strings; blank cells become missing values at read time and
//! unrecognized columns are preserved as record extras. No validation
//! happens here — that is `psf-validate`'s job.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use psf_model::{Dataset, Field, ProviderRecord};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),
}

/// How a source header maps onto the record.
enum ColumnTarget {
    Known(Field),
    Extra(String),
}

/// Read a comma-delimited file into a dataset.
pub fn read_csv(path: &Path) -> Result<Dataset, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = read_from(file)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Read comma-delimited data from any reader.
pub fn read_from<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let targets: Vec<ColumnTarget> = headers
        .iter()
        .map(|header| match Field::from_header(header) {
            Some(field) => ColumnTarget::Known(field),
            None => ColumnTarget::Extra(normalize_header(header)),
        })
        .collect();

    let mut dataset = Dataset::new();
    for result in csv_reader.records() {
        let row = result?;
        let mut record = ProviderRecord::new();
        for (target, cell) in targets.iter().zip(row.iter()) {
            match target {
                ColumnTarget::Known(field) => {
                    if !cell.trim().is_empty() {
                        record.set(*field, Some(cell.to_string()));
                    }
                }
                ColumnTarget::Extra(name) => {
                    if !cell.trim().is_empty() {
                        record.extras.insert(name.clone(), cell.to_string());
                    }
                }
            }
        }
        dataset.push(record);
    }
    Ok(dataset)
}

/// Trim surrounding whitespace and a UTF-8 BOM from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
