//! Numeric-form synonyms for street names.
//!
//! Two orthogonal rewrites: appending an ordinal suffix to a leading
//! digit ("5 Avenue" -> "5th Avenue"), and collapsing hyphenated written
//! ordinals to digits ("Twenty-First" -> "21st"). The written forms
//! cannot be handled as token replacements because the tokenizer splits
//! on the hyphen, so they are generated as display synonyms instead.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<number>\d+)\s+(?P<name>\w.*)$").expect("valid regex"));

static WRITTEN_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<tens>twenty|thirty|fourty|fifty|sixty|seventy|eighty|ninety)-(?P<ones>first|second|third|fourth|fifth|sixth|seventh|eighth|ninth)",
    )
    .expect("valid regex")
});

/// Appends an ordinal suffix to a leading house-style number.
///
/// "5 Avenue" becomes "5th Avenue"; teens always take "th" ("11 Street"
/// -> "11th Street", "111 Street" -> "111th Street"), otherwise the last
/// digit picks "st"/"nd"/"rd"/"th". Returns `None` when the name does
/// not start with a number.
#[must_use]
pub fn number_suffix(text: &str) -> Option<String> {
    let capture = NUMERIC_NAME.captures(text)?;
    let num: i64 = capture["number"].parse().ok()?;

    let suffix = if (10..=20).contains(&(num % 100)) {
        "th"
    } else {
        match num % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };

    Some(format!("{num}{suffix} {}", &capture["name"]))
}

/// Rewrites a hyphenated written ordinal to its digit form.
///
/// "Twenty-First Street" becomes "21st Street". The lexicon covers the
/// compound ordinals 21st through 99th; simple ordinals ("First") are
/// already handled as token replacements. Returns `None` when no written
/// ordinal is present.
#[must_use]
pub fn written_numeric(text: &str) -> Option<String> {
    let capture = WRITTEN_ORDINAL.captures(text)?;
    let matched = capture.get(0)?;

    let tens = match capture["tens"].to_lowercase().as_str() {
        "twenty" => "2",
        "thirty" => "3",
        "fourty" => "4",
        "fifty" => "5",
        "sixty" => "6",
        "seventy" => "7",
        "eighty" => "8",
        "ninety" => "9",
        _ => return None,
    };

    let ones = match capture["ones"].to_lowercase().as_str() {
        "first" => "1st",
        "second" => "2nd",
        "third" => "3rd",
        "fourth" => "4th",
        "fifth" => "5th",
        "sixth" => "6th",
        "seventh" => "7th",
        "eighth" => "8th",
        "ninth" => "9th",
        _ => return None,
    };

    let mut rewritten = String::with_capacity(text.len());
    rewritten.push_str(&text[..matched.start()]);
    rewritten.push_str(tens);
    rewritten.push_str(ones);
    rewritten.push_str(&text[matched.end()..]);

    Some(rewritten)
}
