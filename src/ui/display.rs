//! Display functions for cleaner and validator results

use console::Style;
use std::path::Path;

use crate::operations::validate::ValidationOutcome;
use crate::operations::{CleanOutcome, CleanReport};

/// How removed keys are listed before the summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyListing {
    Hidden,
    Shown,
}

/// Summary line for a cleaner run, e.g.
/// `Removed 3 legacy keys. Count reduced from 10 to 7.`
pub fn format_clean_summary(report: &CleanReport, noun: &str, dry_run: bool) -> String {
    if dry_run {
        format!(
            "Would remove {} {}. Count would be reduced from {} to {}.",
            report.removed_count(),
            noun,
            report.before,
            report.after
        )
    } else {
        format!(
            "Removed {} {}. Count reduced from {} to {}.",
            report.removed_count(),
            noun,
            report.before,
            report.after
        )
    }
}

/// Message printed when a required bundle is missing
pub fn format_missing(path: &Path) -> String {
    format!(
        "{} {} not found",
        Style::new().red().bold().apply_to("Error:"),
        path.display()
    )
}

/// Print the outcome of `clean` or `clean-legacy`
pub fn print_clean_outcome(outcome: &CleanOutcome, noun: &str, dry_run: bool, keys: KeyListing) {
    match outcome {
        CleanOutcome::MissingFile(path) => println!("{}", format_missing(path)),
        CleanOutcome::Cleaned(report) => {
            if keys == KeyListing::Shown {
                let verb = if dry_run { "Would remove" } else { "Removing" };
                for key in &report.removed {
                    println!("  {} {}", Style::new().dim().apply_to(verb), key);
                }
            }
            println!("{}", format_clean_summary(report, noun, dry_run));
        }
    }
}

/// One validator line: `✅ <path> is VALID` or `❌ <path> is INVALID: <detail>`
pub fn format_validation_result(path: &Path, outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => format!(
            "✅ {} is {}",
            path.display(),
            Style::new().green().bold().apply_to("VALID")
        ),
        ValidationOutcome::Invalid(detail) => format!(
            "❌ {} is {}: {}",
            path.display(),
            Style::new().red().bold().apply_to("INVALID"),
            detail
        ),
    }
}

pub fn print_validation_result(path: &Path, outcome: &ValidationOutcome) {
    println!("{}", format_validation_result(path, outcome));
}
