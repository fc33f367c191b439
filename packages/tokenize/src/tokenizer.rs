//! Free-text normalization into canonical token sequences.

use std::sync::LazyLock;

use regex::Regex;

use crate::diacritics::diacritics;
use crate::replacer::ReplacementTable;

/// Caret characters are dropped outright.
static CARETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^+").expect("valid regex"));

/// Apostrophe variants and periods collapse to nothing so "St. Mark's"
/// and "St Marks" tokenize identically.
static APOSTROPHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{2018}\u{2019}\u{02BC}\u{02BB}\u{FF07}'.]").expect("valid regex")
});

/// All other ASCII and general/supplemental Unicode punctuation except `-`
/// becomes a token boundary.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[\u{2000}-\u{206F}\u{2E00}-\u{2E7F}\\!"#$%&()*+,/:;<=>?@\[\]_`{|}~]"##)
        .expect("valid regex")
});

/// Hyphenated numeric ranges ("10-19a") survive hyphen splitting.
static NUMERIC_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-\d+[a-z]?").expect("valid regex"));

/// A token sequence plus the subsequence that had no replacement entry.
///
/// `tokenless` preserves relative order; a name whose `tokenless` is empty
/// was made up entirely of known abbreviations and is already canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub tokenless: Vec<String>,
}

impl Tokenized {
    /// The canonical space-joined form used for name equality.
    #[must_use]
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Normalizes a display string into its canonical token sequence.
#[must_use]
pub fn tokenize(query: &str, table: &ReplacementTable) -> Vec<String> {
    tokenize_complex(query, table).tokens
}

/// Normalizes a display string, also reporting tokens with no table entry.
///
/// An empty input yields empty sequences, never an error.
#[must_use]
pub fn tokenize_complex(query: &str, table: &ReplacementTable) -> Tokenized {
    let normalized = diacritics(query).to_lowercase();
    let normalized = CARETS.replace_all(&normalized, "");
    let normalized = APOSTROPHES.replace_all(&normalized, "");
    let normalized = PUNCTUATION.replace_all(&normalized, " ");

    let mut pretokens: Vec<&str> = Vec::new();
    for piece in normalized.split_whitespace() {
        if NUMERIC_RANGE.is_match(piece) {
            pretokens.push(piece);
        } else {
            pretokens.extend(piece.split('-'));
        }
    }

    let mut result = Tokenized::default();
    for pretoken in pretokens {
        if pretoken.is_empty() {
            continue;
        }

        if let Some(replacement) = table.exact(pretoken) {
            result.tokens.push(replacement.to_string());
        } else if let Some(replaced) = table.scan(pretoken) {
            result.tokens.push(replaced);
        } else {
            result.tokens.push(pretoken.to_string());
            result.tokenless.push(pretoken.to_string());
        }
    }

    result
}
