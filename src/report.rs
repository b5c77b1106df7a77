// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output for generator, validator and coverage runs

use crate::catalog::{self, Language};
use crate::check::{Coverage, CoverageReport};
use crate::generator::{GenerationSummary, LanguageOutcome, Outcome, Source};
use crate::validate::ValidationReport;
use colored::*;

/// Print one generator outcome.
pub fn print_outcome(result: &LanguageOutcome) {
    match &result.outcome {
        Outcome::Created { path, source } => {
            let origin = match source {
                Source::Curated => "curated",
                Source::Base => "english fallback",
            };
            println!(
                "{} {} ({}, {})",
                "created".green().bold(),
                path.display(),
                result.language.name,
                origin
            );
        }
        Outcome::Skipped { path } => {
            println!(
                "{} {} already exists, skipping",
                "skipped".yellow().bold(),
                path.display()
            );
        }
    }
}

pub fn print_generation(summary: &GenerationSummary) {
    for result in &summary.results {
        print_outcome(result);
    }
    println!();
    println!(
        "Processed {} translation files in {} ({} created, {} skipped)",
        summary.processed.to_string().bold(),
        summary.output_dir.display(),
        summary.created,
        summary.skipped
    );
}

pub fn print_validation(report: &ValidationReport) {
    for issue in &report.issues {
        eprintln!("{} {}", "error".red().bold(), issue);
    }
    if report.is_valid() {
        println!(
            "All {} translation YAML files in {} are valid (no syntax errors, no duplicate keys).",
            report.files_checked,
            report.directory.display()
        );
    } else {
        eprintln!(
            "\n{} issue(s) in {} file(s)",
            report.issues.len(),
            report.files_checked
        );
    }
}

pub fn print_coverage(report: &CoverageReport) {
    println!("{}", "=== TRANSLATION COVERAGE ===".bold().cyan());
    println!("Base keys: {}", report.base_keys);
    println!();

    for entry in &report.languages {
        let label = format!("{:<18} {:<6}", entry.language.name, entry.language.code);
        match &entry.coverage {
            Coverage::Absent => {
                println!("  {} {} ({} not found)", "MISSING".red(), label, entry.path.display());
            }
            Coverage::Unreadable { reason } => {
                println!("  {} {} {}", "UNREADABLE".red(), label, reason);
            }
            Coverage::Unparseable { reason } => {
                println!("  {} {} {}", "INVALID".red(), label, reason);
            }
            Coverage::Checked { missing, extra } => {
                let tag = if missing.is_empty() {
                    "OK     ".green()
                } else {
                    "PARTIAL".yellow()
                };
                println!(
                    "  {} {} {} missing, {} extra",
                    tag,
                    label,
                    missing.len(),
                    extra.len()
                );
                for key in missing.iter().take(10) {
                    println!("      - {}", key);
                }
                if missing.len() > 10 {
                    println!("      ... and {} more", missing.len() - 10);
                }
                for key in extra.iter().take(10) {
                    println!("      + {}", key);
                }
            }
        }
    }
    println!();

    let incomplete = report.incomplete().count();
    if incomplete == 0 {
        println!("{}", "All translation files cover the base key set.".green());
    } else {
        println!(
            "{}",
            format!("{} of {} languages incomplete", incomplete, report.languages.len()).red()
        );
    }
}

pub fn print_languages(languages: &[Language]) {
    println!("  {:<6} {:<18} Source", "Code", "Name");
    println!("  {}", "-".repeat(40));
    for language in languages {
        let source = if catalog::curated(language.code).is_some() {
            "curated".green()
        } else {
            "english fallback".normal()
        };
        println!("  {:<6} {:<18} {}", language.code, language.name, source);
    }
}
