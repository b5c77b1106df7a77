// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in translation data for the performance dashboard.
//!
//! Holds the language registry, the English base document and the curated
//! translations as compile-time static tables. Nothing here allocates; the
//! [`crate::document`] module turns a table into an owned document when it is
//! about to be written or compared.
//!
//! ## Adding a curated language
//!
//! 1. Create `xx.rs` with a `pub(crate) const XX: &[StaticSection]` table
//!    carrying every section and label of `BASE`
//! 2. Add a `"xx" => Some(xx::XX)` arm to [`curated`]
//! 3. Add `"xx"` to [`CURATED_CODES`]

mod base;
mod it;
mod pt;

use serde::Serialize;

/// One level-1 section of a static translation table.
#[derive(Debug, Clone, Copy)]
pub struct StaticSection {
    pub name: &'static str,
    pub labels: &'static [(&'static str, &'static str)],
}

/// A registry entry: language code and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

impl Language {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Languages a translation file is generated for, in generation order.
///
/// English is the base language and is maintained by hand, so it has no
/// entry here.
pub const LANGUAGES: &[Language] = &[
    Language::new("it", "Italiano"),
    Language::new("pt", "Português"),
    Language::new("nl", "Nederlands"),
    Language::new("pl", "Polski"),
    Language::new("ru", "Русский"),
    Language::new("tr", "Türkçe"),
    Language::new("el", "Ελληνικά"),
    Language::new("cs", "Čeština"),
    Language::new("ro", "Română"),
    Language::new("hu", "Magyar"),
    Language::new("sv", "Svenska"),
    Language::new("no", "Norsk"),
    Language::new("da", "Dansk"),
    Language::new("fi", "Suomi"),
    Language::new("hr", "Hrvatski"),
    Language::new("bg", "Български"),
    Language::new("zh_CN", "简体中文"),
    Language::new("zh_TW", "繁體中文"),
    Language::new("ja", "日本語"),
    Language::new("ko", "한국어"),
    Language::new("ar", "العربية"),
    Language::new("hi", "हिन्दी"),
    Language::new("id", "Bahasa Indonesia"),
    Language::new("th", "ไทย"),
    Language::new("vi", "Tiếng Việt"),
    Language::new("he", "עברית"),
];

/// Codes with a hand-authored table.
pub const CURATED_CODES: &[&str] = &["it", "pt"];

/// Look up a registry entry by code. Case-sensitive (`zh_CN`, not `zh_cn`).
pub fn language(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|lang| lang.code == code)
}

/// The English base table.
pub fn base() -> &'static [StaticSection] {
    base::BASE
}

/// The curated table for `code`, if one was authored.
pub fn curated(code: &str) -> Option<&'static [StaticSection]> {
    match code {
        "it" => Some(it::IT),
        "pt" => Some(pt::PT),
        _ => None,
    }
}

/// Curated table for `code`, falling back to the English base.
pub fn table_for(code: &str) -> &'static [StaticSection] {
    curated(code).unwrap_or(base::BASE)
}

/// Value of `section.label` in a static table.
pub fn lookup(table: &[StaticSection], section: &str, label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|s| s.name == section)
        .and_then(|s| s.labels.iter().find(|(k, _)| *k == label))
        .map(|&(_, v)| v)
}
