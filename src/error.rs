use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::System;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Everything that can abort a report run.
///
/// PNG export problems are deliberately absent: they are downgraded to a
/// warning inside `charts::save_figure` and never reach this type.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no benchmark results found in {}", .dir.display())]
    NoResults { dir: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed benchmark results in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The report needs both sides; only the charts tolerate a missing one.
    #[error("cannot compose report: {system} metrics are missing")]
    MissingMetrics { system: System },
}
