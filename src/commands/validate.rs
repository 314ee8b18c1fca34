use anyhow::Result;
use openapia::Validator;
use std::path::Path;
use tracing::info;

/// How the outcome of a run is written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Report,
    Json,
    Quiet,
}

/// Validate one document and return whether it is valid.
pub fn validate_command(file: &Path, mode: OutputMode) -> Result<bool> {
    info!("Validating {}", file.display());

    let mut validator = Validator::new();
    let valid = validator.validate_file(file);

    match mode {
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(validator.results())?;
            println!("{json}");
        }
        OutputMode::Report => {
            // A load failure is the only finding, so the diagnostic replaces the report.
            match validator.take_load_error() {
                Some(err) => eprintln!("{:?}", miette::Report::new(err)),
                None => validator.print_results(),
            }
        }
        OutputMode::Quiet => {}
    }

    Ok(valid)
}
