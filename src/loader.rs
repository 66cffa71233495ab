use std::fs;
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::metrics::{MetricsDocument, System};

/// Both exports as found on disk. A side is `None` when its file does not
/// exist or holds no metrics.
#[derive(Debug, Default)]
pub struct LoadedResults {
    pub go: Option<MetricsDocument>,
    pub java: Option<MetricsDocument>,
}

impl LoadedResults {
    pub fn is_empty(&self) -> bool {
        self.go.is_none() && self.java.is_none()
    }
}

/// Read `go-10k-results.json` and `java-10k-results.json` from the results
/// directory. Absence is reported and tolerated; a file that exists but
/// does not parse stops the run.
pub fn load_results(config: &ReportConfig) -> Result<LoadedResults> {
    Ok(LoadedResults {
        go: load_one(System::Go, &config.go_results_path())?,
        java: load_one(System::Java, &config.java_results_path())?,
    })
}

fn load_one(system: System, path: &Path) -> Result<Option<MetricsDocument>> {
    if !path.exists() {
        println!("✗ {system} results not found: {}", path.display());
        return Ok(None);
    }

    let raw = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: MetricsDocument = serde_json::from_str(&raw).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if doc.is_empty() {
        println!("⚠ {system} results are empty: {}", path.display());
        return Ok(None);
    }

    tracing::debug!(%system, path = %path.display(), bytes = raw.len(), "parsed results");
    println!("✓ Loaded {system} results from {}", path.display());
    Ok(Some(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GO_RESULTS_FILE, JAVA_RESULTS_FILE};

    #[test]
    fn missing_files_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_results(&ReportConfig::new(dir.path())).unwrap();
        assert!(loaded.go.is_none());
        assert!(loaded.java.is_none());
        assert!(loaded.is_empty());
    }

    #[test]
    fn loads_present_side_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(JAVA_RESULTS_FILE),
            r#"{"metrics": {"http_reqs": {"values": {"rate": 1100}}}}"#,
        )
        .unwrap();

        let loaded = load_results(&ReportConfig::new(dir.path())).unwrap();
        assert!(loaded.go.is_none());
        let java = loaded.java.unwrap();
        assert_eq!(java.value_or_zero("http_reqs", "rate"), 1100.0);
    }

    #[test]
    fn empty_exports_count_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GO_RESULTS_FILE), "{}").unwrap();
        fs::write(dir.path().join(JAVA_RESULTS_FILE), r#"{"metrics": {}}"#).unwrap();

        let loaded = load_results(&ReportConfig::new(dir.path())).unwrap();
        assert!(loaded.go.is_none());
        assert!(loaded.java.is_none());
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GO_RESULTS_FILE), "{\"metrics\": ").unwrap();

        let err = load_results(&ReportConfig::new(dir.path())).unwrap_err();
        match &err {
            ReportError::Parse { path, .. } => {
                assert!(path.ends_with(GO_RESULTS_FILE));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(err.to_string().contains(GO_RESULTS_FILE));
    }
}
