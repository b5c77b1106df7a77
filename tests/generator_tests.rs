// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the translation file generator

use perf_translations::catalog;
use perf_translations::document::TranslationDocument;
use perf_translations::generator::{self, CuratedSet, GeneratorConfig, Outcome};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_in(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        output_dir: dir.to_path_buf(),
        ..GeneratorConfig::default()
    }
}

fn load(path: &Path) -> TranslationDocument {
    let content = fs::read_to_string(path).expect("translation file should be readable");
    TranslationDocument::from_yaml(&content).expect("translation file should parse")
}

#[test]
fn test_run_creates_file_for_every_language() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir.path().join("translations"));

    let summary = generator::run(&config).expect("generation should succeed");
    assert_eq!(summary.processed, catalog::LANGUAGES.len());
    assert_eq!(summary.created, catalog::LANGUAGES.len());
    assert_eq!(summary.skipped, 0);

    for language in catalog::LANGUAGES {
        let path = config.path_for(language.code);
        assert!(path.is_file(), "{} should exist", path.display());
    }
    assert!(dir
        .path()
        .join("translations/nowo_performance.zh_TW.yaml")
        .is_file());
}

#[test]
fn test_second_run_skips_everything() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    generator::run(&config).unwrap();
    let before = fs::read_to_string(config.path_for("ru")).unwrap();

    let summary = generator::run(&config).expect("rerun should succeed");
    assert_eq!(summary.created, 0);
    assert_eq!(summary.skipped, catalog::LANGUAGES.len());
    assert!(summary
        .results
        .iter()
        .all(|r| matches!(r.outcome, Outcome::Skipped { .. })));
    assert_eq!(fs::read_to_string(config.path_for("ru")).unwrap(), before);
}

#[test]
fn test_italian_file_header_and_title() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let it = catalog::language("it").unwrap();

    let outcome = generator::generate(&it, &CuratedSet::builtin(), &config).unwrap();
    assert!(outcome.is_created());
    assert_eq!(outcome.path(), config.path_for("it"));

    let content = fs::read_to_string(config.path_for("it")).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("# Translations for Nowo Performance Bundle (Italiano)")
    );
    assert_eq!(lines.next(), Some("# Domain: nowo_performance"));

    let doc = TranslationDocument::from_yaml(&content).unwrap();
    assert_eq!(
        doc.get("dashboard", "title"),
        Some("Dashboard Metriche di Prestazione")
    );
}

#[test]
fn test_fallback_language_matches_base() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let pl = catalog::language("pl").unwrap();

    generator::generate(&pl, &CuratedSet::builtin(), &config).unwrap();

    let doc = load(&config.path_for("pl"));
    assert_eq!(
        doc.get("dashboard", "title"),
        Some("Performance Metrics Dashboard")
    );
    assert_eq!(doc, TranslationDocument::from_static(catalog::base()));
}

#[test]
fn test_curated_languages_are_structurally_complete() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let base = TranslationDocument::from_static(catalog::base());
    generator::run(&config).unwrap();

    for code in catalog::CURATED_CODES {
        let doc = load(&config.path_for(code));
        assert!(doc.missing_keys(&base).is_empty(), "{} is incomplete", code);
        let keys: Vec<_> = doc.keys().collect();
        let base_keys: Vec<_> = base.keys().collect();
        assert_eq!(keys, base_keys, "{} key order differs", code);
    }
}

#[test]
fn test_existing_empty_file_left_untouched() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    fs::write(config.path_for("it"), "").unwrap();

    let summary = generator::run(&config).unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        summary.results[0].outcome,
        Outcome::Skipped {
            path: config.path_for("it")
        }
    );
    assert_eq!(fs::metadata(config.path_for("it")).unwrap().len(), 0);
    assert!(config.path_for("pt").is_file());
}

#[test]
fn test_unicode_written_literally() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let pt = catalog::language("pt").unwrap();

    generator::generate(&pt, &CuratedSet::builtin(), &config).unwrap();

    let content = fs::read_to_string(config.path_for("pt")).unwrap();
    assert!(content.contains("(Português)"));
    assert!(content.contains("Painel de Métricas de Desempenho"));
    assert!(content.contains("✓"));
}

#[test]
fn test_failure_propagates_when_output_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("translations");
    fs::write(&blocker, "not a directory").unwrap();

    let result = generator::run(&config_in(&blocker));
    assert!(result.is_err());
}
