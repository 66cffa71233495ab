use serde::Serialize;

use super::document::{
    MetricsDocument, DROPPED_REQUESTS, ERRORS, HTTP_REQS, HTTP_REQ_DURATION,
};

/// The flat set of numbers every chart and the report work from.
/// Latencies are in milliseconds, `error_rate` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ExtractedMetrics {
    pub avg: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
    pub min: f64,
    pub total_requests: f64,
    pub rps: f64,
    pub dropped: f64,
    pub error_rate: f64,
}

impl ExtractedMetrics {
    /// Pull the fixed field set out of one export. Any key that is not
    /// there reads as 0.
    pub fn from_document(doc: &MetricsDocument) -> Self {
        let duration = |key: &str| doc.value_or_zero(HTTP_REQ_DURATION, key);

        Self {
            avg: duration("avg"),
            p90: duration("p(90)"),
            p95: duration("p(95)"),
            p99: duration("p(99)"),
            max: duration("max"),
            min: duration("min"),
            total_requests: doc.value_or_zero(HTTP_REQS, "count"),
            rps: doc.value_or_zero(HTTP_REQS, "rate"),
            dropped: doc.value_or_zero(DROPPED_REQUESTS, "count"),
            // k6 reports a 0..1 fraction
            error_rate: doc.value_or_zero(ERRORS, "rate") * 100.0,
        }
    }
}

/// A missing export stays missing: `None` in, `None` out, and an export
/// with no metrics counts as missing. Callers decide whether to chart it as
/// zeros or to refuse.
pub fn extract_metrics(doc: Option<&MetricsDocument>) -> Option<ExtractedMetrics> {
    doc.filter(|d| !d.is_empty()).map(ExtractedMetrics::from_document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> MetricsDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_every_field() {
        let d = doc(
            r#"{"metrics": {
                "http_req_duration": {"values": {
                    "avg": 1.5, "p(90)": 2.5, "p(95)": 3.5, "p(99)": 7.25,
                    "max": 120.0, "min": 0.2, "med": 1.1
                }},
                "http_reqs": {"values": {"count": 1790000, "rate": 9944.4}},
                "dropped_requests": {"values": {"count": 12, "rate": 0.06}},
                "errors": {"values": {"rate": 0.0125, "passes": 3, "fails": 237}}
            }}"#,
        );

        let m = extract_metrics(Some(&d)).unwrap();
        assert_eq!(m.avg, 1.5);
        assert_eq!(m.p90, 2.5);
        assert_eq!(m.p95, 3.5);
        assert_eq!(m.p99, 7.25);
        assert_eq!(m.max, 120.0);
        assert_eq!(m.min, 0.2);
        assert_eq!(m.total_requests, 1_790_000.0);
        assert_eq!(m.rps, 9944.4);
        assert_eq!(m.dropped, 12.0);
        assert!((m.error_rate - 1.25).abs() < 1e-9);
    }

    #[test]
    fn absent_document_is_none_not_zeroes() {
        assert_eq!(extract_metrics(None), None);
    }

    #[test]
    fn missing_leaf_defaults_to_zero() {
        let d = doc(r#"{"metrics": {"http_req_duration": {"values": {"avg": 4.0}}}}"#);
        let m = extract_metrics(Some(&d)).unwrap();
        assert_eq!(m.avg, 4.0);
        assert_eq!(m.p99, 0.0);
        assert_eq!(m.rps, 0.0);
        assert_eq!(m.error_rate, 0.0);
    }

    #[test]
    fn empty_document_is_none() {
        assert_eq!(extract_metrics(Some(&doc("{}"))), None);
        assert_eq!(extract_metrics(Some(&doc(r#"{"metrics": {}}"#))), None);
    }
}
