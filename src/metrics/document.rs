use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

// ─── Metric / key names in a k6 summary export ───────────────────

pub const HTTP_REQ_DURATION: &str = "http_req_duration";
pub const HTTP_REQS: &str = "http_reqs";
pub const DROPPED_REQUESTS: &str = "dropped_requests";
pub const ERRORS: &str = "errors";

/// A k6 `--summary-export` document. Only `metrics.*.values` is modelled;
/// everything else in the file is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsDocument {
    #[serde(default)]
    metrics: BTreeMap<String, MetricEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MetricEntry {
    #[serde(default)]
    values: MetricValues,
}

/// The `values` object of one metric, e.g. `{"avg": 1.2, "p(95)": 3.4}`.
///
/// Leaves stay as raw JSON so that an odd value (string, null, nested
/// object) degrades to zero instead of rejecting the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MetricValues(BTreeMap<String, Value>);

impl MetricsDocument {
    /// No metrics at all, e.g. a `{}` export. Treated like a missing file.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// `metrics.<name>.values`, if the metric was exported at all.
    pub fn metric(&self, name: &str) -> Option<&MetricValues> {
        self.metrics.get(name).map(|entry| &entry.values)
    }

    /// `metrics.<name>.values.<key>`, defaulting to 0 when either level is
    /// missing.
    pub fn value_or_zero(&self, name: &str, key: &str) -> f64 {
        self.metric(name)
            .map(|values| values.value_or_zero(key))
            .unwrap_or(0.0)
    }
}

impl MetricValues {
    /// Numeric value under `key`; 0 if absent or not a number.
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }
}
