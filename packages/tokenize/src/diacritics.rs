//! Diacritic folding via Unicode decomposition.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritic marks from a string ("Ville de Québec" -> "Ville de Quebec").
///
/// Decomposes to NFD and drops the combining marks. Characters without a
/// decomposition (e.g. `ß`, CJK) pass through unchanged.
#[must_use]
pub fn diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(diacritics("Québec"), "Quebec");
        assert_eq!(diacritics("Mühlenstraße"), "Muhlenstraße");
        assert_eq!(diacritics("Ãâàáä"), "Aaaaa");
    }

    #[test]
    fn passes_ascii_through() {
        assert_eq!(diacritics("Main Street NW"), "Main Street NW");
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(diacritics(""), "");
    }
}
