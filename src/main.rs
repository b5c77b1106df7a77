// SPDX-License-Identifier: PMPL-1.0-or-later

//! perf-translations: generate and check the performance dashboard's
//! translation tables.
//!
//! Without a subcommand the generator runs with its defaults, writing every
//! missing `nowo_performance.<code>.yaml` under `src/Resources/translations`.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use perf_translations::catalog;
use perf_translations::check;
use perf_translations::generator::{self, GeneratorConfig};
use perf_translations::profile::GeneratorProfile;
use perf_translations::report;
use perf_translations::validate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perf-translations")]
#[command(version)]
#[command(about = "Generate, validate and check performance dashboard translation files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing translation files (existing files are never overwritten)
    Generate {
        /// Directory the translation files are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Translation domain used in file names and headers
        #[arg(short, long)]
        domain: Option<String>,

        /// Only generate these language codes
        #[arg(short, long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Generator profile (YAML or JSON)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write documents even when they lack keys of the base document
        #[arg(long)]
        no_strict: bool,

        /// Save a JSON summary of the run
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// Check translation YAML files for syntax errors and duplicate keys
    Validate {
        /// Translations directory
        #[arg(value_name = "DIR", default_value = generator::DEFAULT_OUTPUT_DIR)]
        dir: PathBuf,
    },

    /// Report keys of the English base missing from each language file
    Check {
        /// Translations directory
        #[arg(value_name = "DIR", default_value = generator::DEFAULT_OUTPUT_DIR)]
        dir: PathBuf,

        /// Translation domain used in file names
        #[arg(short, long, default_value = generator::DEFAULT_DOMAIN)]
        domain: String,

        /// Save the coverage report as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// List the languages translation files are generated for
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate {
        output_dir: None,
        domain: None,
        languages: None,
        profile: None,
        no_strict: false,
        json: None,
    }) {
        Commands::Generate {
            output_dir,
            domain,
            languages,
            profile: profile_path,
            no_strict,
            json,
        } => {
            let mut config = GeneratorConfig::default();
            if let Some(path) = profile_path {
                config = GeneratorProfile::load(&path)?.apply(config)?;
            }
            let flags = GeneratorProfile {
                output_dir,
                domain,
                languages,
                strict: no_strict.then_some(false),
                ..GeneratorProfile::default()
            };
            let config = flags.apply(config)?;

            let summary = generator::run(&config)?;
            report::print_generation(&summary);

            if let Some(path) = json {
                generator::write_summary(&summary, &path)?;
                println!("Summary saved to: {}", path.display());
            }
        }

        Commands::Validate { dir } => {
            let result = validate::validate_dir(&dir)?;
            report::print_validation(&result);
            if !result.is_valid() {
                bail!("translation validation failed");
            }
        }

        Commands::Check { dir, domain, json } => {
            let flags = GeneratorProfile {
                output_dir: Some(dir),
                domain: Some(domain),
                ..GeneratorProfile::default()
            };
            let config = flags.apply(GeneratorConfig::default())?;
            let coverage = check::check_dir(&config)?;
            report::print_coverage(&coverage);

            if let Some(path) = json {
                check::write_report(&coverage, &path)?;
                println!("Coverage report saved to: {}", path.display());
            }
            if !coverage.is_complete() {
                bail!("translation coverage incomplete");
            }
        }

        Commands::Languages => {
            report::print_languages(catalog::LANGUAGES);
        }
    }

    Ok(())
}
