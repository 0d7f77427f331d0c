// src/reporting.rs
//! Console and JSON output.

use colored::Colorize;

use crate::config::Limits;
use crate::error::Result;
use crate::types::{FileMetrics, FileOutcome, RunReport};

/// Prints the run as human-readable text. Scores above a configured limit
/// are highlighted; degraded-parse diagnostics and per-function failures
/// are warnings, not errors.
pub fn print_text(report: &RunReport, limits: &Limits, verbose: bool) {
    for file in &report.files {
        print_file(file, limits, verbose);
    }
    print_summary(report);
}

/// Serializes the whole run report to stdout.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_file(file: &FileMetrics, limits: &Limits, verbose: bool) {
    let path = file.path.display();

    if !file.diagnostics.is_empty() {
        let note = format!(
            "warn: {path}: parser reported {} diagnostic(s) on a degraded tree",
            file.diagnostics.len()
        );
        println!("{}", note.yellow());
        if verbose {
            for diagnostic in &file.diagnostics {
                println!("{}", format!("  {diagnostic}").dimmed());
            }
        }
    }

    match &file.outcome {
        FileOutcome::Failed { reason } => {
            println!("{}", format!("error: {path}: {reason}").red().bold());
        }
        FileOutcome::Cyclomatic { complexity } => {
            let score = if limits.cyclomatic_exceeded(*complexity) {
                complexity.to_string().red().bold().to_string()
            } else {
                complexity.to_string()
            };
            println!("{path}: cyclomatic complexity = {score}");
        }
        FileOutcome::Npath(npath) => {
            println!("{path}:");
            for function in &npath.functions {
                let score = if limits.npath_exceeded(function.complexity) {
                    function.complexity.to_string().red().bold().to_string()
                } else {
                    function.complexity.to_string()
                };
                println!("  {:<24} {score}", function.name);
            }
            for failure in &npath.failures {
                println!(
                    "{}",
                    format!("  warn: {}: {}", failure.name, failure.reason).yellow()
                );
            }
            if npath.functions.is_empty() && npath.failures.is_empty() {
                println!("{}", "  no functions found".dimmed());
            }
        }
        FileOutcome::Check { cyclomatic, npath } => {
            let mut lines = Vec::new();
            if limits.cyclomatic_exceeded(*cyclomatic) {
                lines.push(format!(
                    "cyclomatic complexity {cyclomatic} (limit {})",
                    limits.max_cyclomatic
                ));
            }
            for function in &npath.functions {
                if limits.npath_exceeded(function.complexity) {
                    lines.push(format!(
                        "{}: NPath complexity {} (limit {})",
                        function.name, function.complexity, limits.max_npath
                    ));
                }
            }
            if lines.is_empty() && npath.is_complete() {
                println!("{path}: {}", "ok".green());
            }
            for line in lines {
                println!("{}", format!("error: {path}: {line}").red().bold());
            }
            for failure in &npath.failures {
                println!(
                    "{}",
                    format!("warn: {path}: {}: {}", failure.name, failure.reason).yellow()
                );
            }
        }
        FileOutcome::Tokens { tokens } => {
            println!("{}", tokens.join(" "));
        }
    }
}

fn print_summary(report: &RunReport) {
    if report.files.len() <= 1 {
        return;
    }
    let failed = report.failed_file_count();
    let line = if failed == 0 {
        format!("{} files in {}ms", report.files.len(), report.duration_ms)
    } else {
        format!(
            "{} files ({failed} failed) in {}ms",
            report.files.len(),
            report.duration_ms
        )
    };
    println!("{}", line.dimmed());
}
