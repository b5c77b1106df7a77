// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation file validation.
//!
//! Checks every `*.yaml` file in a translations directory:
//!
//! - duplicate keys at the same level of the same block (YAML parsers
//!   either reject them or keep the last one silently, which is almost
//!   always a copy-paste mistake)
//! - YAML syntax
//!
//! Duplicate detection is line based so it can report the offending line.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const KEY_PATTERN: &str = r"^(\s*)([a-zA-Z0-9_]+):\s*(.*)$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub line: usize,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    Unreadable { reason: String },
    InvalidSyntax { reason: String },
    DuplicateKey { line: usize, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileIssue {
    pub file: PathBuf,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for FileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.display().to_string());
        match &self.kind {
            IssueKind::Unreadable { reason } => {
                write!(f, "{}: Could not read file ({}).", name, reason)
            }
            IssueKind::InvalidSyntax { reason } => {
                write!(f, "{}: Invalid YAML syntax ({}).", name, reason)
            }
            IssueKind::DuplicateKey { line, key } => {
                write!(f, "{}:{}: Duplicate key \"{}\" at same level.", name, line, key)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub directory: PathBuf,
    pub files_checked: usize,
    pub issues: Vec<FileIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Duplicate keys in `content`, in line order.
///
/// A key is a duplicate when the same identifier was already declared at
/// the same indentation since the last line at a shallower indentation.
/// Blank and comment lines are ignored.
pub fn find_duplicate_keys(content: &str) -> Result<Vec<DuplicateKey>> {
    let key_re = Regex::new(KEY_PATTERN)?;
    let mut duplicates = Vec::new();
    let mut keys_by_indent: BTreeMap<usize, HashSet<String>> = BTreeMap::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = key_re.captures(line) else {
            continue;
        };
        let indent = caps.get(1).map_or(0, |m| m.as_str().len());
        let key = caps.get(2).map_or("", |m| m.as_str());

        keys_by_indent.retain(|&level, _| level <= indent);
        if !keys_by_indent
            .entry(indent)
            .or_default()
            .insert(key.to_string())
        {
            duplicates.push(DuplicateKey {
                line: index + 1,
                key: key.to_string(),
            });
        }
    }

    Ok(duplicates)
}

/// Issues found in one file's content.
pub fn validate_content(file: &Path, content: &str) -> Result<Vec<FileIssue>> {
    let duplicates = find_duplicate_keys(content)?;
    if !duplicates.is_empty() {
        return Ok(duplicates
            .into_iter()
            .map(|dup| FileIssue {
                file: file.to_path_buf(),
                kind: IssueKind::DuplicateKey {
                    line: dup.line,
                    key: dup.key,
                },
            })
            .collect());
    }

    let blank = content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(Vec::new());
    }

    match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(_) => Ok(Vec::new()),
        Err(err) => Ok(vec![FileIssue {
            file: file.to_path_buf(),
            kind: IssueKind::InvalidSyntax {
                reason: err.to_string(),
            },
        }]),
    }
}

/// `*.yaml` files directly inside `dir`, sorted by name.
pub fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        let is_yaml = path.extension().and_then(|ext| ext.to_str()) == Some("yaml");
        if entry.file_type().is_file() && is_yaml {
            files.push(path.to_path_buf());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Validate every `*.yaml` file in `dir`.
pub fn validate_dir(dir: &Path) -> Result<ValidationReport> {
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }
    let files = yaml_files(dir)?;
    if files.is_empty() {
        bail!("No YAML files found in {}", dir.display());
    }

    let mut issues = Vec::new();
    for file in &files {
        match fs::read_to_string(file) {
            Ok(content) => issues.extend(validate_content(file, &content)?),
            Err(err) => issues.push(FileIssue {
                file: file.clone(),
                kind: IssueKind::Unreadable {
                    reason: err.to_string(),
                },
            }),
        }
    }

    Ok(ValidationReport {
        directory: dir.to_path_buf(),
        files_checked: files.len(),
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dups(content: &str) -> Vec<(usize, String)> {
        find_duplicate_keys(content)
            .unwrap()
            .into_iter()
            .map(|d| (d.line, d.key))
            .collect()
    }

    #[test]
    fn no_duplicates_in_flat_file() {
        assert!(dups("a: 1\nb: 2\n").is_empty());
    }

    #[test]
    fn duplicate_in_same_block() {
        assert_eq!(dups("a: 1\nb: 2\na: 3\n"), [(3, "a".to_string())]);
    }

    #[test]
    fn same_key_in_sibling_blocks_is_fine() {
        assert!(dups("foo:\n  x: 1\nbar:\n  x: 2\n").is_empty());
        assert!(dups("a:\n  x:\n    id: 1\nb:\n  x:\n    id: 2\n").is_empty());
    }

    #[test]
    fn nested_duplicate_reported() {
        assert_eq!(
            dups("parent:\n  level2:\n    key: 1\n    key: 2\n"),
            [(4, "key".to_string())]
        );
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let yaml = "section:\n  # comment\n  first: 1\n\n  second: 2\n  first: 3\n";
        assert_eq!(dups(yaml), [(6, "first".to_string())]);
    }

    #[test]
    fn issue_display_names_file_and_key() {
        let issue = FileIssue {
            file: PathBuf::from("/tmp/x/dup.yaml"),
            kind: IssueKind::DuplicateKey {
                line: 3,
                key: "a".into(),
            },
        };
        assert_eq!(issue.to_string(), "dup.yaml:3: Duplicate key \"a\" at same level.");
    }

    #[test]
    fn invalid_syntax_reported() {
        let issues = validate_content(Path::new("bad.yaml"), "a: 1\nb: [unclosed\n").unwrap();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].kind, IssueKind::InvalidSyntax { .. }));
        assert!(issues[0].to_string().starts_with("bad.yaml: Invalid YAML"));
    }

    #[test]
    fn comment_only_file_is_valid() {
        assert!(validate_content(Path::new("c.yaml"), "# nothing\n\n")
            .unwrap()
            .is_empty());
    }
}
