// SPDX-License-Identifier: PMPL-1.0-or-later

//! Owned, ordered translation documents.
//!
//! A [`TranslationDocument`] is the two-level `section -> label -> text`
//! mapping written to one translation file. Order is insertion order, both in
//! memory and in the YAML output, so a generated file lists sections and
//! labels exactly as the base document does.

use crate::catalog::StaticSection;
use anyhow::{anyhow, bail, Context, Result};
use serde_yaml::{Mapping, Value};

/// Header line naming the bundle; the language display name follows in
/// parentheses.
pub const HEADER_PREFIX: &str = "# Translations for Nowo Performance Bundle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub labels: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationDocument {
    sections: Vec<Section>,
}

impl TranslationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(table: &[StaticSection]) -> Self {
        let sections = table
            .iter()
            .map(|section| Section {
                name: section.name.to_string(),
                labels: section
                    .labels
                    .iter()
                    .map(|&(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, section: &str, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.labels.iter().find(|(k, _)| k == label))
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace `section.label`. New sections and labels are
    /// appended; replacing keeps the existing position.
    pub fn set(&mut self, section: &str, label: &str, value: impl Into<String>) {
        let value = value.into();
        let index = match self.sections.iter().position(|s| s.name == section) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    labels: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        let labels = &mut self.sections[index].labels;
        match labels.iter_mut().find(|(k, _)| k == label) {
            Some(entry) => entry.1 = value,
            None => labels.push((label.to_string(), value)),
        }
    }

    /// Remove `section.label`, returning its text. An emptied section stays
    /// in place.
    pub fn remove(&mut self, section: &str, label: &str) -> Option<String> {
        let section = self.sections.iter_mut().find(|s| s.name == section)?;
        let index = section.labels.iter().position(|(k, _)| k == label)?;
        Some(section.labels.remove(index).1)
    }

    /// `(section, label)` pairs in document order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.sections.iter().flat_map(|section| {
            section
                .labels
                .iter()
                .map(move |(k, _)| (section.name.as_str(), k.as_str()))
        })
    }

    pub fn label_count(&self) -> usize {
        self.sections.iter().map(|s| s.labels.len()).sum()
    }

    /// Keys of `base` that this document lacks, as dotted `section.label`.
    pub fn missing_keys(&self, base: &TranslationDocument) -> Vec<String> {
        base.keys()
            .filter(|(section, label)| self.get(section, label).is_none())
            .map(|(section, label)| format!("{}.{}", section, label))
            .collect()
    }

    /// Keys this document carries that `base` does not.
    pub fn extra_keys(&self, base: &TranslationDocument) -> Vec<String> {
        self.keys()
            .filter(|(section, label)| base.get(section, label).is_none())
            .map(|(section, label)| format!("{}.{}", section, label))
            .collect()
    }

    pub fn to_mapping(&self) -> Mapping {
        let mut root = Mapping::new();
        for section in &self.sections {
            let mut labels = Mapping::new();
            for (k, v) in &section.labels {
                labels.insert(Value::String(k.clone()), Value::String(v.clone()));
            }
            root.insert(Value::String(section.name.clone()), Value::Mapping(labels));
        }
        root
    }

    /// Block-style YAML body, Unicode kept literal.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&Value::Mapping(self.to_mapping()))
            .context("serializing translation document as yaml")
    }

    /// Full file content: two header comments, a blank line, then the body.
    pub fn render(&self, language_name: &str, domain: &str) -> Result<String> {
        let body = self.to_yaml()?;
        Ok(format!(
            "{} ({})\n# Domain: {}\n\n{}",
            HEADER_PREFIX, language_name, domain, body
        ))
    }

    /// Parse a translation file. Comments are ignored; an empty file yields
    /// an empty document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let blank = content.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if blank {
            return Ok(Self::new());
        }
        let value: Value =
            serde_yaml::from_str(content).context("parsing translation document")?;
        let root = match value {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(root) => root,
            other => bail!("expected a mapping at the top level, found {}", kind(&other)),
        };

        let mut document = Self::new();
        for (name, labels) in root {
            let name = key_string(&name)?;
            let labels = match labels {
                Value::Mapping(labels) => labels,
                Value::Null => Mapping::new(),
                other => bail!("section '{}' must be a mapping, found {}", name, kind(&other)),
            };
            let mut section = Section {
                name,
                labels: Vec::with_capacity(labels.len()),
            };
            for (label, text) in labels {
                let label = key_string(&label)?;
                let text = scalar_string(&text).ok_or_else(|| {
                    anyhow!(
                        "label '{}.{}' must be a scalar, found {}",
                        section.name,
                        label,
                        kind(&text)
                    )
                })?;
                section.labels.push((label, text));
            }
            document.sections.push(section);
        }
        Ok(document)
    }
}

fn key_string(value: &Value) -> Result<String> {
    scalar_string(value).ok_or_else(|| anyhow!("keys must be scalars, found {}", kind(value)))
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn base() -> TranslationDocument {
        TranslationDocument::from_static(catalog::base())
    }

    #[test]
    fn from_static_keeps_order() {
        let doc = base();
        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "dashboard",
                "statistics",
                "routes_table",
                "filters",
                "review",
                "confirmations",
                "flash",
                "statistics_page",
                "sort_options",
                "order_options"
            ]
        );
        assert_eq!(doc.keys().next(), Some(("dashboard", "title")));
    }

    #[test]
    fn render_starts_with_header_comments() {
        let rendered = base().render("Polski", "nowo_performance").unwrap();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("# Translations for Nowo Performance Bundle (Polski)")
        );
        assert_eq!(lines.next(), Some("# Domain: nowo_performance"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("dashboard:"));
        assert_eq!(
            lines.next(),
            Some("  title: Performance Metrics Dashboard")
        );
    }

    #[test]
    fn yaml_body_is_block_style_with_literal_unicode() {
        let it = TranslationDocument::from_static(catalog::curated("it").unwrap());
        let body = it.to_yaml().unwrap();
        assert!(!body.contains('{'), "nested mappings must not be inline");
        assert!(body.contains("Sì"));
        assert!(body.contains("95° percentile"));
        assert!(!body.contains("\\u"));
    }

    #[test]
    fn yaml_round_trip_preserves_document() {
        let pt = TranslationDocument::from_static(catalog::curated("pt").unwrap());
        let rendered = pt.render("Português", "nowo_performance").unwrap();
        let parsed = TranslationDocument::from_yaml(&rendered).unwrap();
        assert_eq!(parsed, pt);
    }

    #[test]
    fn numeric_looking_values_stay_strings() {
        let doc = base();
        let parsed = TranslationDocument::from_yaml(&doc.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed.get("filters", "placeholder_time"), Some("0.0000"));
        assert_eq!(parsed.get("filters", "placeholder_count"), Some("0"));
        assert_eq!(parsed.get("review", "no"), Some("No"));
    }

    #[test]
    fn review_no_label_rendering_is_pinned() {
        let it = TranslationDocument::from_static(catalog::curated("it").unwrap());
        let body = it.to_yaml().unwrap();
        assert!(body.lines().any(|line| line == "  no: No"));

        let parsed = TranslationDocument::from_yaml(&body).unwrap();
        assert_eq!(parsed.get("review", "no"), Some("No"));
        assert_eq!(parsed.get("review", "yes"), Some("Sì"));
    }

    #[test]
    fn missing_and_extra_keys() {
        let reference = base();
        let mut doc = base();
        assert!(doc.missing_keys(&reference).is_empty());

        assert_eq!(
            doc.remove("flash", "error").as_deref(),
            Some("An error occurred while processing the request.")
        );
        doc.set("flash", "warning", "Careful");
        doc.set("legacy", "title", "Old");

        assert_eq!(doc.missing_keys(&reference), ["flash.error"]);
        assert_eq!(doc.extra_keys(&reference), ["flash.warning", "legacy.title"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut doc = base();
        let before: Vec<_> = doc.keys().map(|(s, l)| format!("{}.{}", s, l)).collect();
        doc.set("dashboard", "title", "Tableau de bord");
        let after: Vec<_> = doc.keys().map(|(s, l)| format!("{}.{}", s, l)).collect();
        assert_eq!(before, after);
        assert_eq!(doc.get("dashboard", "title"), Some("Tableau de bord"));
    }

    #[test]
    fn empty_content_is_empty_document() {
        let doc = TranslationDocument::from_yaml("").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.missing_keys(&base()).len(), base().label_count());
    }

    #[test]
    fn non_mapping_content_rejected() {
        assert!(TranslationDocument::from_yaml("- a\n- b\n").is_err());
        assert!(TranslationDocument::from_yaml("dashboard: [1, 2]\n").is_err());
        assert!(TranslationDocument::from_yaml("dashboard:\n  title: [x]\n").is_err());
    }
}
