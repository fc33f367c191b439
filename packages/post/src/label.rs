//! Variant-list labeling: ordering, deduplication and title-casing of
//! the display forms that make up a `carmen:text` value.

use address_itp_feature::Name;
use serde_json::Value;

/// Tokens that mark a display form as a less desirable synonym
/// (extensions, connectors, unit designators).
const LESS_DESIRABLE: &[&str] = &[
    "ext",
    "extension",
    "connector",
    "br",
    "branch",
    "unit",
    "apt",
    "suite",
    "lot",
];

/// Minor words kept lowercase when title-casing.
const MINORS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "from", "in", "nor", "of", "on",
    "or", "per", "the", "to", "via", "vs",
];

struct Working {
    name: Name,
    tokenized: String,
    length: usize,
}

/// Orders and deduplicates a JSON array of name variants, returning the
/// display strings ready to join into a `carmen:text` value.
///
/// Variants are ranked by priority, then by observed frequency, then by
/// display length; duplicates by tokenized form collapse onto the
/// best-ranked spelling, and every surviving display is title-cased.
/// Entries that fail to parse as name variants are skipped.
#[must_use]
pub fn label(variants: &Value) -> Vec<String> {
    let Some(entries) = variants.as_array() else {
        return Vec::new();
    };

    let mut texts: Vec<Working> = entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<Name>(entry.clone()).ok())
        .map(|name| {
            let tokenized = name
                .tokenized
                .clone()
                .unwrap_or_else(|| name.display.to_lowercase());
            let length = name.display.len();
            Working {
                name,
                tokenized,
                length,
            }
        })
        .collect();

    // Unranked variants: demote less desirable spellings, and lift the
    // frequency to the best observed for the same tokenized form so an
    // uncommon spelling cannot outrank the common one.
    let frequencies: Vec<(String, i64)> = texts
        .iter()
        .map(|text| (text.tokenized.clone(), text.name.freq))
        .collect();

    for text in &mut texts {
        if text.name.priority != 0 {
            continue;
        }

        if text
            .tokenized
            .split_whitespace()
            .any(|token| LESS_DESIRABLE.contains(&token))
        {
            text.name.priority = -1;
        }

        for (tokenized, freq) in &frequencies {
            if *tokenized == text.tokenized && text.name.freq < *freq {
                text.name.freq = *freq;
            }
        }
    }

    // Dedupe identical displays (first wins) and drop empty ones.
    let mut seen_displays: Vec<String> = Vec::new();
    texts.retain(|text| {
        if text.name.display.trim().is_empty() {
            return false;
        }
        if seen_displays.contains(&text.name.display) {
            return false;
        }
        seen_displays.push(text.name.display.clone());
        true
    });

    // Collapse tokenized duplicates onto the best-ranked spelling: sort
    // so the keeper leads its group, then keep the first of each group.
    texts.sort_by(|a, b| {
        b.name
            .priority
            .cmp(&a.name.priority)
            .then_with(|| a.tokenized.cmp(&b.tokenized))
            .then_with(|| b.length.cmp(&a.length))
    });

    let mut seen_tokenized: Vec<String> = Vec::new();
    texts.retain(|text| {
        if seen_tokenized.contains(&text.tokenized) {
            return false;
        }
        seen_tokenized.push(text.tokenized.clone());
        true
    });

    texts.sort_by(|a, b| {
        b.name
            .priority
            .cmp(&a.name.priority)
            .then_with(|| b.name.freq.cmp(&a.name.freq))
            .then_with(|| b.length.cmp(&a.length))
    });

    texts
        .iter()
        .map(|text| title_case(text.name.display.trim()))
        .collect()
}

/// Title-cases a display string, keeping minor words lowercase.
///
/// Words are lowercased first, so "MAIN ST NW" and "main st nw" label
/// identically. Word boundaries are any run of non-alphanumeric
/// characters; runs of whitespace collapse to a single space.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (index, word) in text.split_whitespace().enumerate() {
        if index > 0 {
            out.push(' ');
        }

        let lowered = word.to_lowercase();
        if MINORS.contains(&lowered.as_str()) {
            out.push_str(&lowered);
            continue;
        }

        let mut at_boundary = true;
        for c in lowered.chars() {
            if at_boundary && c.is_alphanumeric() {
                out.extend(c.to_uppercase());
                at_boundary = false;
            } else {
                out.push(c);
                if !c.is_alphanumeric() {
                    at_boundary = true;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("main street"), "Main Street");
        assert_eq!(title_case("MAIN STREET"), "Main Street");
        assert_eq!(title_case("main  street"), "Main Street");
    }

    #[test]
    fn minor_words_stay_lowercase() {
        assert_eq!(
            title_case("avenue of the americas"),
            "Avenue of the Americas"
        );
    }

    #[test]
    fn hyphenated_words_capitalize_both_halves() {
        assert_eq!(title_case("vine-maple road"), "Vine-Maple Road");
    }

    #[test]
    fn labels_by_priority_order() {
        let labeled = label(&json!([
            { "display": "Main St", "priority": -1, "tokenized": "main st" },
            { "display": "Main Street", "priority": 0, "tokenized": "main street" }
        ]));

        assert_eq!(labeled, vec!["Main Street", "Main St"]);
    }

    #[test]
    fn tokenized_duplicates_collapse_onto_the_best_spelling() {
        let labeled = label(&json!([
            { "display": "Main Street NW", "priority": 0, "tokenized": "main st nw" },
            { "display": "MAIN ST NW", "priority": -1, "tokenized": "main st nw" }
        ]));

        assert_eq!(labeled, vec!["Main Street NW"]);
    }

    #[test]
    fn frequency_breaks_priority_ties() {
        let labeled = label(&json!([
            { "display": "Rare Spelling", "priority": 0, "tokenized": "rare spelling", "freq": 1 },
            { "display": "Common Spelling", "priority": 0, "tokenized": "common spelling", "freq": 10 }
        ]));

        assert_eq!(labeled, vec!["Common Spelling", "Rare Spelling"]);
    }

    #[test]
    fn extension_spellings_are_demoted() {
        let labeled = label(&json!([
            { "display": "Main Street Ext", "priority": 0, "tokenized": "main st ext" },
            { "display": "Main Street", "priority": 0, "tokenized": "main st" }
        ]));

        assert_eq!(labeled, vec!["Main Street", "Main Street Ext"]);
    }

    #[test]
    fn empty_and_unparsable_entries_are_dropped() {
        let labeled = label(&json!([
            { "display": "  ", "priority": 0 },
            { "priority": 0 },
            { "display": "Oak Avenue", "priority": 0 }
        ]));

        assert_eq!(labeled, vec!["Oak Avenue"]);
    }

    #[test]
    fn non_array_input_labels_nothing() {
        assert!(label(&json!("Main Street")).is_empty());
        assert!(label(&json!(null)).is_empty());
    }
}
