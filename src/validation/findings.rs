//! Finding accumulation and the result snapshot.

use serde::Serialize;
use std::fmt;

/// A single validation message. Severity is given by the list it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Finding(String);

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accumulator threaded through every check of one run.
#[derive(Debug, Default)]
pub struct Findings {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Finding::new(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(Finding::new(message));
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Snapshot of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    /// A run that failed before any section was checked.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut findings = Findings::new();
        findings.error(message);
        findings.into_result()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(Finding::message).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(Finding::message).collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Findings::new().into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_findings_are_valid() {
        let result = Findings::new().into_result();
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_warnings_do_not_affect_validity() {
        let mut findings = Findings::new();
        findings.warning("context.memory is recommended");
        findings.warning("evaluation.metrics is recommended");
        let result = findings.into_result();
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_findings_keep_discovery_order() {
        let mut findings = Findings::new();
        findings.error("first");
        findings.warning("w");
        findings.error("second");
        let result = findings.into_result();
        assert!(!result.valid);
        assert_eq!(result.error_messages(), vec!["first", "second"]);
        assert_eq!(result.warning_messages(), vec!["w"]);
    }

    #[test]
    fn test_failed_result() {
        let result = ValidationResult::failed("File not found: x.yaml");
        assert!(!result.valid);
        assert_eq!(result.errors, vec![Finding::new("File not found: x.yaml")]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_result_serializes_messages_as_strings() {
        let mut findings = Findings::new();
        findings.error("Missing required section: info");
        findings.warning("Version 0.2.0 may not be supported.");
        let json = serde_json::to_value(findings.into_result()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": ["Missing required section: info"],
                "warnings": ["Version 0.2.0 may not be supported."],
            })
        );
    }
}
