//! Go vs Java benchmark reporting: turns two k6 summary exports into four
//! comparison charts (HTML + PNG) and a RESULTS.md write-up.

pub mod charts;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use config::{Cli, ImageSettings, ReportConfig};
pub use error::{ReportError, Result};
pub use pipeline::{run, RunSummary};
