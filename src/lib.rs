// SPDX-License-Identifier: PMPL-1.0-or-later

//! perf-translations: translation tables for the performance metrics dashboard.
//!
//! Generates one YAML string table per supported language from the built-in
//! English base document and the hand-authored translations, then keeps those
//! files honest:
//!
//! 1. **Generate**: create-once writes of `<domain>.<code>.yaml`, curated
//!    text where it exists and English fallback everywhere else.
//! 2. **Validate**: YAML syntax and duplicate keys across a translations
//!    directory.
//! 3. **Check**: every file carries the full key set of the base document.

pub mod catalog;
pub mod check;
pub mod document;
pub mod generator;
pub mod profile;
pub mod report;
pub mod validate;
