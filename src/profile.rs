// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator profile loading.
//!
//! A profile is an optional YAML or JSON file overriding the generator
//! defaults. Command-line flags override the profile in turn.

use crate::catalog::{self, Language};
use crate::generator::GeneratorConfig;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorProfile {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub strict: Option<bool>,
    /// Restrict generation to these codes. Registry order is kept.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

impl GeneratorProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading generator profile {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json generator profile {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml generator profile {}", path.display())),
            _ => Err(anyhow!(
                "unsupported generator profile extension for {}",
                path.display()
            )),
        }
    }

    /// Apply this profile on top of `config`.
    pub fn apply(&self, mut config: GeneratorConfig) -> Result<GeneratorConfig> {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(domain) = &self.domain {
            config.domain = non_empty("domain", domain)?;
        }
        if let Some(extension) = &self.extension {
            config.extension = non_empty("extension", extension.trim_start_matches('.'))?;
        }
        if let Some(strict) = self.strict {
            config.strict = strict;
        }
        if let Some(codes) = &self.languages {
            config.languages = select_languages(codes)?;
        }
        Ok(config)
    }
}

/// Registry entries for `codes`, in registry order. Unknown codes are an
/// error.
pub fn select_languages(codes: &[String]) -> Result<Vec<Language>> {
    if let Some(unknown) = codes.iter().find(|code| catalog::language(code).is_none()) {
        return Err(anyhow!("unknown language code '{}'", unknown));
    }
    Ok(catalog::LANGUAGES
        .iter()
        .copied()
        .filter(|lang| codes.iter().any(|code| code == lang.code))
        .collect())
}

fn non_empty(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("'{}' must not be empty", field));
    }
    Ok(value.to_string())
}
