//! Checks for the single-mapping sections and the version scalar.

use serde_json::Value;
use tracing::debug;

use super::findings::Findings;
use crate::document::{Document, as_mapping, is_one_of, render_value, section};

/// Schema version this validator was written against.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Version prefix accepted without a warning.
pub const SUPPORTED_VERSION_PREFIX: &str = "0.1";

/// Top-level sections, in the order they are reported and checked.
pub const REQUIRED_SECTIONS: [&str; 8] = [
    "openapia",
    "info",
    "models",
    "prompts",
    "constraints",
    "tasks",
    "context",
    "evaluation",
];

const INFO_FIELDS: [&str; 3] = ["title", "version", "description"];
const COMPLEXITIES: [&str; 3] = ["low", "medium", "high"];

pub fn check_required_sections(document: &Document, findings: &mut Findings) {
    for name in REQUIRED_SECTIONS {
        if section(document, name).is_none() {
            findings.error(format!("Missing required section: {name}"));
        }
    }
}

pub fn check_version(version: &Value, findings: &mut Findings) {
    let Some(version) = version.as_str() else {
        findings.error("openapia version must be a string");
        return;
    };

    if !version.starts_with(SUPPORTED_VERSION_PREFIX) {
        debug!("Version {version} is outside {SUPPORTED_VERSION_PREFIX}.x");
        findings.warning(format!("Version {version} may not be supported."));
    }
}

pub fn check_info(info: &Value, findings: &mut Findings) {
    let Some(info) = as_mapping(info) else {
        findings.error("info must be an array");
        return;
    };

    for field in INFO_FIELDS {
        if !info.contains_key(field) {
            findings.error(format!("Missing required field in info: {field}"));
        }
    }

    if let Some(metadata) = info.get("ai_metadata") {
        check_ai_metadata(metadata, findings);
    }
}

pub fn check_ai_metadata(metadata: &Value, findings: &mut Findings) {
    let Some(metadata) = as_mapping(metadata) else {
        findings.error("ai_metadata must be an array");
        return;
    };

    if !metadata.contains_key("domain") {
        findings.warning("ai_metadata.domain is recommended");
    }

    if let Some(complexity) = metadata.get("complexity")
        && !is_one_of(complexity, &COMPLEXITIES)
    {
        findings.error(format!("Invalid complexity: {}", render_value(complexity)));
    }
}

pub fn check_context(context: &Value, findings: &mut Findings) {
    check_recommended_key(context, "context", "memory", findings);
}

pub fn check_evaluation(evaluation: &Value, findings: &mut Findings) {
    check_recommended_key(evaluation, "evaluation", "metrics", findings);
}

fn check_recommended_key(value: &Value, name: &str, key: &str, findings: &mut Findings) {
    let Some(mapping) = as_mapping(value) else {
        findings.error(format!("{name} must be an array"));
        return;
    };

    if !mapping.contains_key(key) {
        findings.warning(format!("{name}.{key} is recommended"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(check: fn(&Value, &mut Findings), value: Value) -> (Vec<String>, Vec<String>) {
        let mut findings = Findings::new();
        check(&value, &mut findings);
        let result = findings.into_result();
        (
            result.errors.iter().map(ToString::to_string).collect(),
            result.warnings.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn test_required_sections_in_declared_order() {
        let mut findings = Findings::new();
        check_required_sections(&json!({"info": {}, "tasks": []}), &mut findings);
        let result = findings.into_result();
        assert_eq!(
            result.error_messages(),
            vec![
                "Missing required section: openapia",
                "Missing required section: models",
                "Missing required section: prompts",
                "Missing required section: constraints",
                "Missing required section: context",
                "Missing required section: evaluation",
            ]
        );
    }

    #[test]
    fn test_version_prefix_mismatch_warns() {
        let (errors, warnings) = run(check_version, json!("0.2.0"));
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["Version 0.2.0 may not be supported."]);
    }

    #[test]
    fn test_non_string_version_errors_without_warning() {
        let (errors, warnings) = run(check_version, json!(2));
        assert_eq!(errors, vec!["openapia version must be a string"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_supported_versions() {
        for version in ["0.1", "0.1.0", "0.1.7-beta", SCHEMA_VERSION] {
            let (errors, warnings) = run(check_version, json!(version));
            assert!(errors.is_empty(), "{version}");
            assert!(warnings.is_empty(), "{version}");
        }
    }

    #[test]
    fn test_info_missing_fields() {
        let (errors, _) = run(check_info, json!({"version": "1.0"}));
        assert_eq!(
            errors,
            vec![
                "Missing required field in info: title",
                "Missing required field in info: description",
            ]
        );
    }

    #[test]
    fn test_info_must_be_mapping() {
        let (errors, _) = run(check_info, json!("title version description"));
        assert_eq!(errors, vec!["info must be an array"]);
    }

    #[test]
    fn test_info_recurses_into_ai_metadata() {
        let info = json!({
            "title": "t",
            "version": "1",
            "description": "d",
            "ai_metadata": {"complexity": "extreme"},
        });
        let (errors, warnings) = run(check_info, info);
        assert_eq!(errors, vec!["Invalid complexity: extreme"]);
        assert_eq!(warnings, vec!["ai_metadata.domain is recommended"]);
    }

    #[test]
    fn test_complexity_is_case_sensitive() {
        let (errors, warnings) = run(
            check_ai_metadata,
            json!({"domain": "nlp", "complexity": "High"}),
        );
        assert_eq!(errors, vec!["Invalid complexity: High"]);
        assert!(warnings.is_empty());

        let (errors, _) = run(
            check_ai_metadata,
            json!({"domain": "nlp", "complexity": "high"}),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_ai_metadata_must_be_mapping() {
        let (errors, warnings) = run(check_ai_metadata, json!(3));
        assert_eq!(errors, vec!["ai_metadata must be an array"]);
        assert!(warnings.is_empty());

        let info = json!({
            "title": "t",
            "version": "1",
            "description": "d",
            "ai_metadata": ["nlp"],
        });
        let (errors, warnings) = run(check_info, info);
        assert_eq!(errors, vec!["ai_metadata must be an array"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_context_and_evaluation() {
        let (errors, warnings) = run(check_context, json!({}));
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["context.memory is recommended"]);

        let (errors, warnings) = run(check_context, json!(["memory"]));
        assert_eq!(errors, vec!["context must be an array"]);
        assert!(warnings.is_empty());

        let (errors, warnings) = run(check_evaluation, json!({"metrics": []}));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let (errors, _) = run(check_evaluation, json!(null));
        assert_eq!(errors, vec!["evaluation must be an array"]);
    }

    #[test]
    fn test_evaluation_without_metrics_warns() {
        let (errors, warnings) = run(check_evaluation, json!({"datasets": ["faq"]}));
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["evaluation.metrics is recommended"]);

        let (errors, warnings) = run(check_evaluation, json!({}));
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["evaluation.metrics is recommended"]);
    }
}
