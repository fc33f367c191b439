//! The match/no-match decision for one incoming record.

use address_itp_feature::{AddressRecord, Names};
use address_itp_tokenize::{ReplacementTable, tokenize};
use serde::Serialize;
use serde_json::Value;

/// A persistent record supplied by the spatial store as a potential
/// duplicate of an incoming record.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier of the persistent record.
    pub id: i64,

    /// The candidate's name variants; `tokenized` is used when present,
    /// otherwise the display form is tokenized on the fly.
    pub names: Names,

    /// Point coordinates of the persistent record, `[lon, lat]`.
    pub point: [f64; 2],

    /// The authoritative feature payload. Untouched by conflation: on a
    /// merge the existing record wins.
    pub feature: Value,
}

/// The outcome of comparing one incoming record against its candidates.
///
/// Serialized one object per line with an `action` tag, so a downstream
/// consumer can replay the stream against the persistent store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Directive {
    /// No candidate matched; the record enters the corpus verbatim.
    Create {
        #[serde(flatten)]
        feature: Value,
    },

    /// The record duplicates an existing entry, which stays
    /// authoritative.
    Merge { id: i64 },
}

/// Decides whether an incoming record duplicates one of its candidates.
///
/// A candidate matches iff the incoming record's primary tokenized name
/// equals the tokenized form of at least one candidate variant and the
/// coordinates are numerically identical. Candidates are evaluated in
/// caller order and the first match wins; the caller is responsible for
/// any distance-based pre-ordering.
#[must_use]
pub fn compare(
    incoming: &AddressRecord,
    candidates: &[Candidate],
    table: &ReplacementTable,
) -> Directive {
    let incoming_tokenized = incoming.names.primary().map_or_else(String::new, |name| {
        name.tokenized
            .clone()
            .unwrap_or_else(|| tokenize(&name.display, table).join(" "))
    });

    for candidate in candidates {
        if candidate.point != incoming.point {
            continue;
        }

        let name_match = candidate.names.names.iter().any(|name| {
            let candidate_tokenized = name
                .tokenized
                .clone()
                .unwrap_or_else(|| tokenize(&name.display, table).join(" "));
            candidate_tokenized == incoming_tokenized
        });

        if name_match {
            log::trace!(
                "merging '{incoming_tokenized}' at {:?} into {}",
                incoming.point,
                candidate.id
            );
            return Directive::Merge { id: candidate.id };
        }
    }

    Directive::Create {
        feature: incoming.to_feature(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use address_itp_feature::Name;
    use serde_json::json;

    fn table() -> ReplacementTable {
        ReplacementTable::for_languages(&["en".to_string()]).unwrap()
    }

    fn record(street: &str, point: [f64; 2]) -> AddressRecord {
        AddressRecord::from_feature(&json!({
            "type": "Feature",
            "properties": {
                "number": 1,
                "street": street,
                "source": "test"
            },
            "geometry": {
                "type": "Point",
                "coordinates": point
            }
        }))
        .unwrap()
    }

    fn candidate(id: i64, display: &str, tokenized: &str, point: [f64; 2]) -> Candidate {
        let mut name = Name::new(display.to_string(), 0);
        name.tokenized = Some(tokenized.to_string());

        Candidate {
            id,
            names: Names::new(vec![name]),
            point,
            feature: json!({ "id": id }),
        }
    }

    #[test]
    fn no_candidates_creates() {
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &[], &table());

        let Directive::Create { feature } = directive else {
            panic!("expected create");
        };
        assert_eq!(feature["geometry"]["coordinates"], json!([0.0, 0.0]));
        assert_eq!(feature["properties"]["street"][0]["display"], json!("Main Street North"));
    }

    #[test]
    fn name_miss_creates() {
        let candidates = vec![candidate(1, "2nd Street West", "2nd st w", [0.0, 0.0])];
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &candidates, &table());

        assert!(matches!(directive, Directive::Create { .. }));
    }

    #[test]
    fn exact_match_merges() {
        let candidates = vec![candidate(1, "Main Street North", "main st n", [0.0, 0.0])];
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &candidates, &table());

        assert_eq!(directive, Directive::Merge { id: 1 });
    }

    #[test]
    fn distance_disqualifies_even_with_matching_name() {
        let candidates = vec![candidate(1, "Main Street North", "main st n", [1.0, 1.0])];
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &candidates, &table());

        assert!(matches!(directive, Directive::Create { .. }));
    }

    #[test]
    fn any_nonzero_offset_is_a_new_record() {
        let candidates = vec![candidate(
            1,
            "Main Street North",
            "main st n",
            [0.0, 1e-12],
        )];
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &candidates, &table());

        assert!(matches!(directive, Directive::Create { .. }));
    }

    #[test]
    fn abbreviation_differences_still_match() {
        // "Main St N" and "Main Street North" tokenize identically.
        let candidates = vec![candidate(1, "Main Street North", "main st n", [0.5, 0.5])];
        let directive = compare(&record("Main St N", [0.5, 0.5]), &candidates, &table());

        assert_eq!(directive, Directive::Merge { id: 1 });
    }

    #[test]
    fn first_satisfying_candidate_wins() {
        let candidates = vec![
            candidate(7, "Elm Street", "elm st", [0.0, 0.0]),
            candidate(8, "Main Street North", "main st n", [0.0, 0.0]),
            candidate(9, "Main Street North", "main st n", [0.0, 0.0]),
        ];
        let directive = compare(&record("Main Street North", [0.0, 0.0]), &candidates, &table());

        assert_eq!(directive, Directive::Merge { id: 8 });
    }

    #[test]
    fn secondary_candidate_variants_can_match() {
        let mut secondary = Name::new("US Route 1".to_string(), -1);
        secondary.tokenized = Some("us rte 1".to_string());
        let mut primary = Name::new("Atlantic Highway".to_string(), 0);
        primary.tokenized = Some("atlantic hwy".to_string());

        let candidates = vec![Candidate {
            id: 4,
            names: Names::new(vec![primary, secondary]),
            point: [0.0, 0.0],
            feature: json!({}),
        }];
        let directive = compare(&record("US Route 1", [0.0, 0.0]), &candidates, &table());

        assert_eq!(directive, Directive::Merge { id: 4 });
    }

    #[test]
    fn create_serializes_with_an_action_tag() {
        let directive = compare(&record("Main Street", [0.0, 0.0]), &[], &table());
        let line = serde_json::to_value(&directive).unwrap();

        assert_eq!(line["action"], json!("create"));
        assert_eq!(line["type"], json!("Feature"));
    }

    #[test]
    fn merge_serializes_with_an_action_tag() {
        let line = serde_json::to_value(Directive::Merge { id: 42 }).unwrap();
        assert_eq!(line, json!({ "action": "merge", "id": 42 }));
    }
}
