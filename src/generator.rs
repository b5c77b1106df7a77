// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation file generator.
//!
//! Writes one `<domain>.<code>.<ext>` file per registry language. Files are
//! create-once: an existing destination is never touched, so the generator
//! can be rerun after hand edits without losing them.

use crate::catalog::{self, Language};
use crate::document::TranslationDocument;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "src/Resources/translations";
pub const DEFAULT_DOMAIN: &str = "nowo_performance";
pub const DEFAULT_EXTENSION: &str = "yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub domain: String,
    pub extension: String,
    /// Refuse to write a document that lacks any key of the base document.
    pub strict: bool,
    pub languages: Vec<Language>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            domain: DEFAULT_DOMAIN.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            strict: true,
            languages: catalog::LANGUAGES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Destination of the file for `code`.
    pub fn path_for(&self, code: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}.{}", self.domain, code, self.extension))
    }
}

/// Hand-authored documents keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct CuratedSet {
    documents: HashMap<String, TranslationDocument>,
}

impl CuratedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The curated translations shipped with the crate.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for code in catalog::CURATED_CODES {
            if let Some(table) = catalog::curated(code) {
                set.insert(*code, TranslationDocument::from_static(table));
            }
        }
        set
    }

    pub fn insert(&mut self, code: impl Into<String>, document: TranslationDocument) {
        self.documents.insert(code.into(), document);
    }

    pub fn get(&self, code: &str) -> Option<&TranslationDocument> {
        self.documents.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.documents.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Curated,
    Base,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Created { path: PathBuf, source: Source },
    Skipped { path: PathBuf },
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Created { path, .. } | Outcome::Skipped { path } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageOutcome {
    pub language: Language,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub created_at: String,
    pub output_dir: PathBuf,
    pub domain: String,
    pub processed: usize,
    pub created: usize,
    pub skipped: usize,
    pub results: Vec<LanguageOutcome>,
}

/// Writes translation files for one configuration.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    curated: &'a CuratedSet,
    base: TranslationDocument,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, curated: &'a CuratedSet) -> Self {
        Self {
            config,
            curated,
            base: TranslationDocument::from_static(catalog::base()),
        }
    }

    /// Generate the file for a single language.
    ///
    /// Returns [`Outcome::Skipped`] without writing when the destination
    /// already exists.
    pub fn generate(&self, language: &Language) -> Result<Outcome> {
        let path = self.config.path_for(language.code);
        if path.exists() {
            return Ok(Outcome::Skipped { path });
        }

        let (document, source) = match self.curated.get(language.code) {
            Some(document) => (document, Source::Curated),
            None => (&self.base, Source::Base),
        };

        if self.config.strict {
            let missing = document.missing_keys(&self.base);
            if !missing.is_empty() {
                return Err(anyhow!(
                    "translation for {} is missing {} key(s): {}",
                    language,
                    missing.len(),
                    missing.join(", ")
                ));
            }
        }

        let content = document
            .render(language.name, &self.config.domain)
            .with_context(|| format!("rendering translation for {}", language))?;

        // create_new closes the window between the exists() check and the write.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Ok(Outcome::Skipped { path });
            }
            Err(err) => {
                return Err(err).with_context(|| format!("creating {}", path.display()));
            }
        };
        file.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(Outcome::Created { path, source })
    }

    /// Generate every configured language in registry order.
    pub fn run(&self) -> Result<GenerationSummary> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!("creating directory {}", self.config.output_dir.display())
        })?;

        let mut results = Vec::with_capacity(self.config.languages.len());
        for language in &self.config.languages {
            let outcome = self.generate(language)?;
            results.push(LanguageOutcome {
                language: *language,
                outcome,
            });
        }

        let created = results.iter().filter(|r| r.outcome.is_created()).count();
        Ok(GenerationSummary {
            created_at: chrono::Utc::now().to_rfc3339(),
            output_dir: self.config.output_dir.clone(),
            domain: self.config.domain.clone(),
            processed: results.len(),
            created,
            skipped: results.len() - created,
            results,
        })
    }
}

/// Generate the file for `language` using `curated` and `config`.
pub fn generate(
    language: &Language,
    curated: &CuratedSet,
    config: &GeneratorConfig,
) -> Result<Outcome> {
    Generator::new(config, curated).generate(language)
}

/// Generate all configured languages with the built-in curated set.
pub fn run(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let curated = CuratedSet::builtin();
    Generator::new(config, &curated).run()
}

/// Write a generation summary as JSON.
pub fn write_summary(summary: &GenerationSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    let json =
        serde_json::to_string_pretty(summary).context("serializing generation summary")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
