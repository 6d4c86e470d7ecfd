//! Result persistence
//!
//! Writes the result log to a JSON or CSV file. Both writers share the
//! schema in [`QueryResult::FIELDS`], so keys and columns always agree.
//!
//! The target file is created or overwritten. Persistence is attempted
//! exactly once; failures are returned to the caller, which reports them
//! without terminating the process.

mod errors;

pub use errors::{PersistError, PersistResult};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::results::QueryResult;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Csv,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

/// Timestamped filename used when no path is given.
pub fn default_filename(format: Format, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "resultados_dorking_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}

/// Write `records` to `path` (or a timestamped default) in `format`.
///
/// Returns the path actually written.
pub fn persist(
    records: &[QueryResult],
    path: Option<&Path>,
    format: Format,
) -> PersistResult<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_filename(format, Local::now()),
    };

    let file = File::create(&path).map_err(|e| PersistError::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        Format::Json => write_json(records, &mut writer),
        Format::Csv => write_csv(records, &mut writer),
    };
    encoded.map_err(|e| e.at_path(&path))?;

    writer.flush().map_err(|e| PersistError::io(&path, e))?;
    Ok(path)
}

/// Pretty-printed JSON array. Non-ASCII text is written as-is.
pub fn write_json<W: Write>(records: &[QueryResult], writer: &mut W) -> PersistResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

/// Header row from the schema, then one row per record.
pub fn write_csv<W: Write>(records: &[QueryResult], writer: &mut W) -> PersistResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(QueryResult::FIELDS)?;
    for record in records {
        wtr.write_record(record.as_row())?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
