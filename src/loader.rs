//! Document loading: path → format → generic tree.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::document::Document;
use crate::error_utils::{create_named_source, span_at, span_at_offset};

/// Source syntax of a document, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    #[diagnostic(code(openapia::load::not_found))]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(openapia::load::unreadable))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format: {}", path.display())]
    #[diagnostic(
        code(openapia::load::unsupported_format),
        help("OpenAPIA documents must use a .yaml, .yml or .json extension")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(openapia::load::yaml))]
    Yaml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(openapia::load::json))]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },
}

/// Read and parse the document at `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Parsing {} as {:?}", path.display(), format);
    parse_document(&content, format, path)
}

/// Parse already-read text. `origin` only labels diagnostics.
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    origin: &Path,
) -> Result<Document, LoadError> {
    match format {
        DocumentFormat::Yaml => {
            if content.trim().is_empty() {
                return Ok(Document::Null);
            }
            serde_yaml::from_str(content).map_err(|e| LoadError::Yaml {
                message: e.to_string(),
                span: e.location().map(|loc| span_at_offset(content, loc.index())),
                src: create_named_source(origin, content.to_string()),
            })
        }
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| LoadError::Json {
            message: e.to_string(),
            span: (e.line() > 0).then(|| span_at(content, e.line(), e.column())),
            src: create_named_source(origin, content.to_string()),
        }),
    }
}
