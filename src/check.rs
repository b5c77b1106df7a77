// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key coverage of generated translation files.
//!
//! Loads the file of every configured language and compares its key set with
//! the English base document.

use crate::catalog::{self, Language};
use crate::document::TranslationDocument;
use crate::generator::GeneratorConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Coverage {
    Absent,
    Unreadable { reason: String },
    Unparseable { reason: String },
    Checked { missing: Vec<String>, extra: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub language: Language,
    pub path: PathBuf,
    #[serde(flatten)]
    pub coverage: Coverage,
}

impl LanguageCoverage {
    /// Present, parseable and carrying every base key. Extra keys are
    /// reported but tolerated.
    pub fn is_complete(&self) -> bool {
        matches!(&self.coverage, Coverage::Checked { missing, .. } if missing.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub base_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(LanguageCoverage::is_complete)
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &LanguageCoverage> {
        self.languages.iter().filter(|l| !l.is_complete())
    }
}

/// Compare every configured language's file in `config.output_dir` with the
/// base document.
pub fn check_dir(config: &GeneratorConfig) -> Result<CoverageReport> {
    let base = TranslationDocument::from_static(catalog::base());
    let mut languages = Vec::with_capacity(config.languages.len());

    for language in &config.languages {
        let path = config.path_for(language.code);
        let coverage = if !path.is_file() {
            Coverage::Absent
        } else {
            match fs::read_to_string(&path) {
                Ok(content) => match TranslationDocument::from_yaml(&content) {
                    Ok(document) => Coverage::Checked {
                        missing: document.missing_keys(&base),
                        extra: document.extra_keys(&base),
                    },
                    Err(err) => Coverage::Unparseable {
                        reason: format!("{:#}", err),
                    },
                },
                Err(err) => Coverage::Unreadable {
                    reason: err.to_string(),
                },
            }
        };
        languages.push(LanguageCoverage {
            language: *language,
            path,
            coverage,
        });
    }

    Ok(CoverageReport {
        base_keys: base.label_count(),
        languages,
    })
}

/// Write a coverage report as JSON.
pub fn write_report(report: &CoverageReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &std::path::Path, codes: &[&str]) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.to_path_buf(),
            languages: codes.iter().filter_map(|c| catalog::language(c)).collect(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn absent_files_are_incomplete() {
        let dir = TempDir::new().unwrap();
        let report = check_dir(&config_for(dir.path(), &["it"])).unwrap();
        assert_eq!(report.languages[0].coverage, Coverage::Absent);
        assert!(!report.is_complete());
    }

    #[test]
    fn missing_and_extra_keys_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), &["fi"]);
        let mut doc = TranslationDocument::from_static(catalog::base());
        doc.remove("review", "yes");
        doc.set("review", "maybe", "Ehkä");
        fs::write(config.path_for("fi"), doc.render("Suomi", "nowo_performance").unwrap()).unwrap();

        let report = check_dir(&config).unwrap();
        assert_eq!(
            report.languages[0].coverage,
            Coverage::Checked {
                missing: vec!["review.yes".to_string()],
                extra: vec!["review.maybe".to_string()],
            }
        );
        assert_eq!(report.incomplete().count(), 1);
    }

    #[test]
    fn extra_keys_alone_do_not_fail() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), &["da"]);
        let mut doc = TranslationDocument::from_static(catalog::base());
        doc.set("flash", "hint", "Tip");
        fs::write(config.path_for("da"), doc.to_yaml().unwrap()).unwrap();

        assert!(check_dir(&config).unwrap().is_complete());
    }

    #[test]
    fn unparseable_file_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), &["sv"]);
        fs::write(config.path_for("sv"), "- just\n- a list\n").unwrap();

        let report = check_dir(&config).unwrap();
        assert!(matches!(
            report.languages[0].coverage,
            Coverage::Unparseable { .. }
        ));
    }

    #[test]
    fn unreadable_file_does_not_stop_other_languages() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), &["it", "pl"]);
        fs::write(config.path_for("it"), b"dashboard:\n  title: \xff\xfe\n").unwrap();
        let pl = TranslationDocument::from_static(catalog::base());
        fs::write(config.path_for("pl"), pl.render("Polski", "nowo_performance").unwrap()).unwrap();

        let report = check_dir(&config).expect("check should report per language");
        assert_eq!(report.languages.len(), 2);
        assert!(matches!(
            report.languages[0].coverage,
            Coverage::Unreadable { .. }
        ));
        assert!(report.languages[1].is_complete());
        assert_eq!(report.incomplete().count(), 1);
    }

    #[test]
    fn report_written_as_json() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path(), &["hu"]);
        let report = check_dir(&config).unwrap();
        let out = dir.path().join("coverage.json");
        write_report(&report, &out).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["languages"][0]["status"], "absent");

        let err = write_report(&report, &dir.path().join("missing/coverage.json")).unwrap_err();
        assert!(err.to_string().contains("writing"));
    }
}
