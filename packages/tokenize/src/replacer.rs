//! Replacement table construction from abbreviation equivalence classes.

use std::collections::HashMap;

use regex::Regex;
use serde_json::Value;

use crate::diacritics::diacritics;
use crate::languages;

/// Errors raised while building a [`ReplacementTable`].
///
/// These are configuration-time failures: every downstream match decision
/// depends on the table, so an unusable source is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum ReplacerError {
    /// The class source was not an array of equivalence classes.
    #[error("replacement classes must be a JSON array of arrays")]
    InvalidSource,
}

/// A read-only mapping from variant spellings to canonical token forms.
///
/// Lookup is two-phase: an exact map first, then an insertion-ordered scan
/// of the same keys compiled as anchored whole-token regexes. The regex
/// list is compiled once here, never per token; keys that fail to compile
/// are simply absent from the scan.
#[derive(Debug, Default)]
pub struct ReplacementTable {
    exact: HashMap<String, String>,
    /// Keys in first-insertion order; drives the regex scan order.
    order: Vec<String>,
    patterns: Vec<(Regex, String)>,
}

impl ReplacementTable {
    /// An empty table. Tokenization degrades to pure normalization.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from raw equivalence classes.
    ///
    /// Each class is a JSON array of equivalent spellings, possibly
    /// containing non-string sentinel entries which are filtered out.
    /// Members are sorted ascending by length (stable); classes left with
    /// fewer than two strings carry no information and are skipped.
    /// Every member, including the canonical shortest one, maps to the
    /// normalized shortest member. A key claimed by more than one class
    /// belongs to the last class that set it.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacerError::InvalidSource`] if `classes` is not an
    /// array. Malformed class entries inside the array are filtered, not
    /// fatal.
    pub fn from_classes(classes: &Value) -> Result<Self, ReplacerError> {
        let classes = classes.as_array().ok_or(ReplacerError::InvalidSource)?;

        let mut table = Self::default();
        for class in classes {
            let Some(entries) = class.as_array() else {
                continue;
            };

            let members: Vec<&str> = entries.iter().filter_map(Value::as_str).collect();
            table.add_class(&members);
        }

        table.compile();
        Ok(table)
    }

    /// Builds a table from built-in per-language classes.
    ///
    /// Unknown tags contribute nothing beyond a warning; the run proceeds
    /// with whatever languages resolved.
    ///
    /// # Errors
    ///
    /// Currently infallible, but kept fallible to match
    /// [`ReplacementTable::from_classes`] at the configuration boundary.
    pub fn for_languages(tags: &[String]) -> Result<Self, ReplacerError> {
        let mut table = Self::default();

        for tag in tags {
            match languages::classes(tag) {
                Some(classes) => {
                    for class in classes {
                        table.add_class(class);
                    }
                }
                None => log::warn!("no abbreviation classes for language '{tag}', skipping"),
            }
        }

        table.compile();
        Ok(table)
    }

    fn add_class(&mut self, members: &[&str]) {
        let mut members: Vec<&str> = members.to_vec();
        members.sort_by_key(|member| member.len());

        if members.len() < 2 {
            return;
        }

        // The shortest member maps to itself too, so pre-abbreviated
        // input is excluded from the tokenless sequence.
        let canonical = normalize(members[0]);
        for member in members {
            let key = normalize(member);
            if self.exact.insert(key.clone(), canonical.clone()).is_none() {
                self.order.push(key);
            }
        }
    }

    /// Compiles the anchored regex scan list from the exact map.
    fn compile(&mut self) {
        self.patterns = self
            .order
            .iter()
            .filter_map(|key| {
                let replacement = self.exact.get(key)?.clone();
                match Regex::new(&format!("^{key}$")) {
                    Ok(pattern) => Some((pattern, replacement)),
                    Err(_) => {
                        log::trace!("skipping unparsable replacement key '{key}'");
                        None
                    }
                }
            })
            .collect();
    }

    /// Exact-key lookup.
    #[must_use]
    pub fn exact(&self, token: &str) -> Option<&str> {
        self.exact.get(token).map(String::as_str)
    }

    /// Ordered whole-token regex scan; first matching entry wins.
    #[must_use]
    pub fn scan(&self, token: &str) -> Option<String> {
        self.patterns
            .iter()
            .find(|(pattern, _)| pattern.is_match(token))
            .map(|(pattern, replacement)| pattern.replace(token, replacement.as_str()).into_owned())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }
}

fn normalize(member: &str) -> String {
    diacritics(member).to_lowercase()
}
