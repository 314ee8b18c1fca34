pub mod document;
pub mod error_utils;
pub mod loader;
pub mod validation;

pub use document::Document;
pub use loader::{DocumentFormat, LoadError, load_document};
pub use validation::{Finding, ValidationResult, Validator, render_report, validate_spec};
