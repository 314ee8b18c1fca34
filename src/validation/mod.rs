mod collections;
mod findings;
mod references;
mod report;
mod sections;


use std::path::Path;
use tracing::{debug, info};

use crate::document::{Document, section};
use crate::loader::{LoadError, load_document};

pub use collections::{CONSTRAINT_SEVERITIES, MODEL_TYPES, PROMPT_ROLES};
pub use findings::{Finding, Findings, ValidationResult};
pub use report::{print_results, render_report};
pub use sections::{REQUIRED_SECTIONS, SCHEMA_VERSION, SUPPORTED_VERSION_PREFIX};

type SectionCheck = fn(&serde_json::Value, &mut Findings);

/// Per-section checks, in pipeline order.
const SECTION_CHECKS: [(&str, SectionCheck); 8] = [
    ("openapia", sections::check_version),
    ("info", sections::check_info),
    ("models", collections::check_models),
    ("prompts", collections::check_prompts),
    ("constraints", collections::check_constraints),
    ("tasks", collections::check_tasks),
    ("context", sections::check_context),
    ("evaluation", sections::check_evaluation),
];

/// Validate a parsed document. Each call starts from an empty accumulator.
pub fn validate_spec(document: &Document) -> ValidationResult {
    let mut findings = Findings::new();

    debug!("Checking required sections");
    sections::check_required_sections(document, &mut findings);

    for (name, check) in SECTION_CHECKS {
        if let Some(value) = section(document, name) {
            debug!("Checking section {name}");
            check(value, &mut findings);
        }
    }

    debug!("Checking cross-section references");
    references::check_references(document, &mut findings);

    let result = findings.into_result();
    info!(
        "Validation finished: {} errors, {} warnings",
        result.errors.len(),
        result.warnings.len()
    );
    result
}

/// Stateful front end that keeps the snapshot of its most recent run.
#[derive(Debug, Default)]
pub struct Validator {
    results: ValidationResult,
    load_error: Option<LoadError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_spec(&mut self, document: &Document) -> bool {
        self.load_error = None;
        self.results = validate_spec(document);
        self.results.valid
    }

    /// Load and validate a file. A load failure becomes the only error.
    pub fn validate_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        debug!("Validating {}", path.display());

        match load_document(path) {
            Ok(document) => self.validate_spec(&document),
            Err(err) => {
                debug!("Failed to load {}: {err}", path.display());
                self.results = ValidationResult::failed(err.to_string());
                self.load_error = Some(err);
                false
            }
        }
    }

    pub fn errors(&self) -> &[Finding] {
        &self.results.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.results.warnings
    }

    pub fn results(&self) -> &ValidationResult {
        &self.results
    }

    /// The loader failure behind the last `validate_file`, for rich display.
    pub fn take_load_error(&mut self) -> Option<LoadError> {
        self.load_error.take()
    }

    pub fn print_results(&self) {
        print_results(&self.results);
    }
}
