//! Field validation for typed Nordic headers
//!
//! Validators never abort processing. Each check returns whether the field
//! satisfies its declared constraint and, when it does not, reports a
//! [`Diagnostic`] to a [`ValidationSink`]. Header validators evaluate every
//! field so that all diagnostics of a header surface in a single pass.
//!
//! - [`headers`] - per-header constraint tables

pub mod headers;

pub use headers::{
    validate_comment_header, validate_error_header, validate_event, validate_waveform_header,
};

use crate::models::HeaderType;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub field: String,
    pub header_type: HeaderType,
    /// Observed value, or `"<empty>"` for a missing one
    pub observed: String,
    pub constraint: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} header field '{}': value {} violates {}",
            self.header_type, self.field, self.observed, self.constraint
        )
    }
}

/// Receiver of validation diagnostics
pub trait ValidationSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl ValidationSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!("Validation failed: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

const EMPTY_VALUE: &str = "<empty>";

fn empty_policy(
    field: &str,
    header_type: HeaderType,
    constraint: String,
    empty_allowed: bool,
    sink: &mut dyn ValidationSink,
) -> bool {
    if !empty_allowed {
        sink.report(Diagnostic {
            field: field.to_string(),
            header_type,
            observed: EMPTY_VALUE.to_string(),
            constraint: format!("{} (value required)", constraint),
        });
    }
    empty_allowed
}

/// Check an optional integer against an inclusive range
pub fn validate_integer(
    value: Option<i32>,
    field: &str,
    min: i32,
    max: i32,
    empty_allowed: bool,
    header_type: HeaderType,
    sink: &mut dyn ValidationSink,
) -> bool {
    let constraint = format!("range [{}, {}]", min, max);
    match value {
        None => empty_policy(field, header_type, constraint, empty_allowed, sink),
        Some(v) if (min..=max).contains(&v) => true,
        Some(v) => {
            sink.report(Diagnostic {
                field: field.to_string(),
                header_type,
                observed: v.to_string(),
                constraint,
            });
            false
        }
    }
}

/// Check an optional float against an inclusive range
pub fn validate_float(
    value: Option<f64>,
    field: &str,
    min: f64,
    max: f64,
    empty_allowed: bool,
    header_type: HeaderType,
    sink: &mut dyn ValidationSink,
) -> bool {
    let constraint = format!("range [{}, {}]", min, max);
    match value {
        None => empty_policy(field, header_type, constraint, empty_allowed, sink),
        Some(v) if v >= min && v <= max => true,
        Some(v) => {
            sink.report(Diagnostic {
                field: field.to_string(),
                header_type,
                observed: v.to_string(),
                constraint,
            });
            false
        }
    }
}

/// Check the trimmed char length of an optional string
///
/// A value that is blank after trimming is treated as missing.
pub fn validate_string(
    value: Option<&str>,
    field: &str,
    min_len: usize,
    max_len: usize,
    empty_allowed: bool,
    header_type: HeaderType,
    sink: &mut dyn ValidationSink,
) -> bool {
    let constraint = format!("length [{}, {}]", min_len, max_len);
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty());

    match trimmed {
        None => empty_policy(field, header_type, constraint, empty_allowed, sink),
        Some(v) => {
            let len = v.chars().count();
            if (min_len..=max_len).contains(&len) {
                true
            } else {
                sink.report(Diagnostic {
                    field: field.to_string(),
                    header_type,
                    observed: format!("'{}' (length {})", v, len),
                    constraint,
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_out_of_range_reports() {
        let mut sink = DiagnosticCollector::new();
        let valid = validate_integer(Some(400), "gap", 0, 360, true, HeaderType::Error, &mut sink);

        assert!(!valid);
        assert_eq!(sink.len(), 1);
        let diagnostic = &sink.diagnostics()[0];
        assert_eq!(diagnostic.field, "gap");
        assert_eq!(diagnostic.header_type, HeaderType::Error);
        assert_eq!(diagnostic.observed, "400");
        assert_eq!(diagnostic.constraint, "range [0, 360]");
    }

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let mut sink = DiagnosticCollector::new();
        assert!(validate_integer(Some(0), "gap", 0, 360, true, HeaderType::Error, &mut sink));
        assert!(validate_integer(Some(360), "gap", 0, 360, true, HeaderType::Error, &mut sink));
        assert!(!validate_integer(Some(-1), "gap", 0, 360, true, HeaderType::Error, &mut sink));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_missing_integer_follows_empty_policy() {
        let mut sink = DiagnosticCollector::new();
        assert!(validate_integer(None, "gap", 0, 360, true, HeaderType::Error, &mut sink));
        assert!(sink.is_empty());

        assert!(!validate_integer(None, "gap", 0, 360, false, HeaderType::Error, &mut sink));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.diagnostics()[0].observed, "<empty>");
    }

    #[test]
    fn test_float_range() {
        let mut sink = DiagnosticCollector::new();
        assert!(validate_float(Some(99.9), "second error", 0.0, 99.9, true, HeaderType::Error, &mut sink));
        assert!(!validate_float(Some(100.0), "second error", 0.0, 99.9, true, HeaderType::Error, &mut sink));
        assert!(!validate_float(Some(-0.1), "second error", 0.0, 99.9, true, HeaderType::Error, &mut sink));
        assert!(validate_float(None, "second error", 0.0, 99.9, true, HeaderType::Error, &mut sink));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_nan_float_fails_range() {
        let mut sink = DiagnosticCollector::new();
        assert!(!validate_float(Some(f64::NAN), "depth error", 0.0, 999.9, true, HeaderType::Error, &mut sink));
    }

    #[test]
    fn test_string_length() {
        let mut sink = DiagnosticCollector::new();
        let long = "x".repeat(79);

        assert!(validate_string(Some("ok"), "comment", 0, 78, false, HeaderType::Comment, &mut sink));
        assert!(validate_string(Some(&"x".repeat(78)), "comment", 0, 78, false, HeaderType::Comment, &mut sink));
        assert!(!validate_string(Some(&long), "comment", 0, 78, false, HeaderType::Comment, &mut sink));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_string_length_uses_trimmed_value() {
        let mut sink = DiagnosticCollector::new();
        let padded = format!("  {}  ", "x".repeat(78));
        assert!(validate_string(Some(&padded), "comment", 0, 78, false, HeaderType::Comment, &mut sink));
    }

    #[test]
    fn test_blank_string_follows_empty_policy() {
        let mut sink = DiagnosticCollector::new();
        assert!(!validate_string(Some("   "), "comment", 0, 78, false, HeaderType::Comment, &mut sink));
        assert!(!validate_string(None, "comment", 0, 78, false, HeaderType::Comment, &mut sink));
        assert!(validate_string(None, "comment", 0, 78, true, HeaderType::Comment, &mut sink));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            field: "gap".to_string(),
            header_type: HeaderType::Error,
            observed: "400".to_string(),
            constraint: "range [0, 360]".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "error (type 5) header field 'gap': value 400 violates range [0, 360]"
        );
    }
}
