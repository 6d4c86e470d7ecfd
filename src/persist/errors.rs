//! # Persistence Errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence errors.
///
/// None of these are fatal to the process: callers report them and
/// continue.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }

    /// Re-tag I/O failures raised inside an encoder with the target path.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            PersistError::Json(e) if e.is_io() => Self::io(path, io::Error::from(e)),
            PersistError::Csv(e) if e.is_io_error() => Self::io(path, io::Error::from(e)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_io_failure_gets_path() {
        let err = PersistError::Json(serde_json::Error::io(io::Error::new(
            io::ErrorKind::Other,
            "disk full",
        )));

        let err = err.at_path(Path::new("saida.json"));
        assert!(matches!(&err, PersistError::Io { path, .. } if path == Path::new("saida.json")));
        assert!(err.to_string().contains("saida.json"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_csv_io_failure_gets_path() {
        let err = PersistError::Csv(csv::Error::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        )));

        let err = err.at_path(Path::new("saida.csv"));
        assert!(matches!(err, PersistError::Io { .. }));
        assert!(err.to_string().contains("saida.csv"));
    }

    #[test]
    fn test_encoding_errors_untouched() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let err = PersistError::Json(json_err).at_path(Path::new("saida.json"));
        assert!(matches!(err, PersistError::Json(_)));
    }
}
