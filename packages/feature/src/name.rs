//! Street name variants and the ranking rules applied to them.
//!
//! A feature carries one or more display forms of its name ("Main St NW",
//! "Main Street Northwest", "US Route 81"). Each form is a [`Name`] with a
//! signed priority; the highest-priority entry is the primary display form
//! used for matching and labeling.

use serde::{Deserialize, Serialize};

const fn default_freq() -> i64 {
    1
}

/// One display form of a street/feature name with a preference rank.
///
/// Higher `priority` is more preferred. `tokenized` is filled in once the
/// display string has been run through the tokenizer and is the form used
/// for equality decisions; `freq` carries how often this exact form was
/// observed in the source data and breaks ties at label time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    /// Street name as it should be displayed.
    pub display: String,

    /// Rank among this feature's variants. Higher wins.
    #[serde(default)]
    pub priority: i32,

    /// Canonical token sequence, space-joined. Set by the tokenizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenized: Option<String>,

    /// Label of the data source that contributed this form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Observed occurrence count in the source data.
    #[serde(default = "default_freq")]
    pub freq: i64,
}

impl Name {
    /// Creates a name variant with no tokenization or source attribution.
    #[must_use]
    pub const fn new(display: String, priority: i32) -> Self {
        Self {
            display,
            priority,
            tokenized: None,
            source: None,
            freq: 1,
        }
    }

    /// Creates a name variant attributed to a source label.
    #[must_use]
    pub fn with_source(display: String, priority: i32, source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            ..Self::new(display, priority)
        }
    }
}

/// An ordered list of name variants for a single feature.
///
/// Invariant after [`Names::finalize`]: no two entries share a case-folded
/// `display`, entries are in stable descending priority order, and the
/// first entry's priority is strictly greater than the second's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Names {
    pub names: Vec<Name>,
}

impl Names {
    #[must_use]
    pub const fn new(names: Vec<Name>) -> Self {
        Self { names }
    }

    /// The most preferred variant, if any.
    ///
    /// Only meaningful after [`Names::finalize`] has run; before that the
    /// list order is source order, not priority order.
    #[must_use]
    pub fn primary(&self) -> Option<&Name> {
        self.names.first()
    }

    /// Appends derived variants to the list.
    pub fn concat(&mut self, synonyms: Vec<Name>) {
        self.names.extend(synonyms);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Applies the post-merge policy: case-insensitive dedupe by display
    /// (the higher-priority occurrence survives, at the position of the
    /// first), stable descending sort by priority, and a tie-break bump so
    /// a unique primary variant always exists.
    pub fn finalize(&mut self) {
        let mut kept: Vec<Name> = Vec::with_capacity(self.names.len());

        for name in self.names.drain(..) {
            let folded = name.display.to_lowercase();
            match kept
                .iter_mut()
                .find(|k| k.display.to_lowercase() == folded)
            {
                Some(existing) => {
                    if name.priority > existing.priority {
                        *existing = name;
                    }
                }
                None => kept.push(name),
            }
        }

        kept.sort_by_key(|name| std::cmp::Reverse(name.priority));

        if kept.len() >= 2 && kept[0].priority == kept[1].priority {
            kept[0].priority += 1;
        }

        self.names = kept;
    }
}
