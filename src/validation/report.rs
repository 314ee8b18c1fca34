//! Human-readable rendering of a [`ValidationResult`].

use colored::Colorize;
use std::fmt::{self, Write};

use super::findings::{Finding, ValidationResult};

pub fn render_report(result: &ValidationResult) -> String {
    Report(result).to_string()
}

struct Report<'a>(&'a ValidationResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.0)
    }
}

fn write_report(out: &mut impl Write, result: &ValidationResult) -> fmt::Result {
    if !result.errors.is_empty() {
        write_block(out, &"❌ Validation Errors:".red().bold().to_string(), &result.errors)?;
    }

    if !result.warnings.is_empty() {
        write_block(
            out,
            &"⚠️  Validation Warnings:".yellow().bold().to_string(),
            &result.warnings,
        )?;
    }

    if result.errors.is_empty() {
        let summary = if result.warnings.is_empty() {
            "✅ Validation passed with no issues"
        } else {
            "✅ Validation passed with warnings"
        };
        writeln!(out, "{}", summary.green())?;
    }

    Ok(())
}

pub fn print_results(result: &ValidationResult) {
    print!("{}", render_report(result));
}

fn write_block(out: &mut impl Write, banner: &str, findings: &[Finding]) -> fmt::Result {
    writeln!(out, "{banner}")?;
    for finding in findings {
        writeln!(out, "  - {finding}")?;
    }
    Ok(())
}
