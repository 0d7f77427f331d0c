// src/cli/dispatch.rs
//! Executes a parsed command line: expands inputs, runs the metric for
//! each file (files are independent, so they run in parallel), prints the
//! report, and picks the exit code.

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::ingest;
use crate::reporting;
use crate::types::{FileMetrics, FileOutcome, NpathReport, RunReport};
use crate::{cyclomatic, npath, tokens};

/// Exit code when any input file could not be loaded or computed.
pub const EXIT_FILE_FAILED: i32 = 1;
/// Exit code when `check` found a function or file over a configured limit.
pub const EXIT_LIMITS_EXCEEDED: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Cyclomatic,
    Npath,
    Tokens,
    Check,
}

/// Runs one command to completion.
///
/// # Errors
/// Only configuration-independent failures (e.g. report serialization)
/// surface as errors; per-file problems are part of the report and feed
/// the exit code instead.
pub fn execute(cli: Cli) -> Result<i32> {
    let config = Config::load();

    let (metric, paths, format) = match cli.command {
        Commands::Cyclomatic { paths, format } => (Metric::Cyclomatic, paths, format),
        Commands::Npath { paths, format } => (Metric::Npath, paths, format),
        Commands::Tokens { paths } => (Metric::Tokens, paths, OutputFormat::Text),
        Commands::Check { paths, format } => (Metric::Check, paths, format),
    };

    let files = expand_paths(&paths);
    if cli.verbose {
        eprintln!("{}", format!("analyzing {} file(s)", files.len()).dimmed());
    }

    let report = scan(&files, metric);

    match format {
        OutputFormat::Text => reporting::print_text(&report, &config.limits, cli.verbose),
        OutputFormat::Json => reporting::print_json(&report)?,
    }

    if report.has_failures() {
        return Ok(EXIT_FILE_FAILED);
    }
    if metric == Metric::Check && limits_exceeded(&report, &config) {
        return Ok(EXIT_LIMITS_EXCEEDED);
    }
    Ok(0)
}

/// Files stay as given; directories expand to the `.json` files beneath
/// them, in path order so runs are deterministic.
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file())
                .map(walkdir::DirEntry::into_path)
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn scan(files: &[PathBuf], metric: Metric) -> RunReport {
    let start = Instant::now();
    let results: Vec<FileMetrics> = files
        .par_iter()
        .map(|path| analyze_file(path, metric))
        .collect();

    RunReport {
        files: results,
        duration_ms: start.elapsed().as_millis(),
    }
}

fn analyze_file(path: &Path, metric: Metric) -> FileMetrics {
    let loaded = match ingest::load_tree(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            return FileMetrics {
                path: path.to_path_buf(),
                diagnostics: Vec::new(),
                outcome: FileOutcome::Failed {
                    reason: e.to_string(),
                },
            }
        }
    };

    let outcome = match metric {
        Metric::Cyclomatic => FileOutcome::Cyclomatic {
            complexity: cyclomatic::cyclomatic_complexity(&loaded.root),
        },
        Metric::Npath => FileOutcome::Npath(npath::npath_complexity(&loaded.root)),
        Metric::Tokens => FileOutcome::Tokens {
            tokens: tokens::tokens(&loaded.root)
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
        Metric::Check => FileOutcome::Check {
            cyclomatic: cyclomatic::cyclomatic_complexity(&loaded.root),
            npath: npath::npath_complexity(&loaded.root),
        },
    };

    FileMetrics {
        path: path.to_path_buf(),
        diagnostics: loaded.diagnostics,
        outcome,
    }
}

fn limits_exceeded(report: &RunReport, config: &Config) -> bool {
    report.files.iter().any(|file| match &file.outcome {
        FileOutcome::Check { cyclomatic, npath } => {
            config.limits.cyclomatic_exceeded(*cyclomatic)
                || npath_over_limit(npath, config)
                || !npath.is_complete()
        }
        _ => false,
    })
}

fn npath_over_limit(npath: &NpathReport, config: &Config) -> bool {
    npath
        .functions
        .iter()
        .any(|f| config.limits.npath_exceeded(f.complexity))
}
