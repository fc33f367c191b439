//! Built-in abbreviation equivalence classes.
//!
//! Each class is an ordered list of equivalent spellings; the shortest
//! member becomes the canonical token form. The `en` set covers the USPS
//! Publication 28 street-suffix abbreviations in common use plus the
//! cardinal directionals applied symmetrically at intake and match time.

/// English street-type and directional equivalences.
const EN: &[&[&str]] = &[
    &["alley", "aly"],
    &["annex", "anx"],
    &["avenue", "ave", "av"],
    &["beach", "bch"],
    &["boulevard", "blvd", "blv"],
    &["branch", "br"],
    &["bridge", "brg"],
    &["bypass", "byp"],
    &["canyon", "cyn"],
    &["causeway", "cswy"],
    &["center", "ctr", "cntr"],
    &["circle", "cir"],
    &["court", "ct"],
    &["cove", "cv"],
    &["creek", "crk"],
    &["crescent", "cres"],
    &["crossing", "xing"],
    &["drive", "dr"],
    &["east", "e"],
    &["expressway", "expy"],
    &["extension", "ext"],
    &["freeway", "fwy"],
    &["garden", "gdn"],
    &["gardens", "gdns"],
    &["grove", "grv"],
    &["harbor", "hbr"],
    &["heights", "hts"],
    &["highway", "hwy"],
    &["hill", "hl"],
    &["hollow", "holw"],
    &["island", "is"],
    &["junction", "jct"],
    &["lake", "lk"],
    &["landing", "lndg"],
    &["lane", "ln"],
    &["lodge", "ldg"],
    &["loop", "lp"],
    &["manor", "mnr"],
    &["meadow", "mdw"],
    &["mount", "mt"],
    &["mountain", "mtn"],
    &["north", "n"],
    &["northeast", "ne"],
    &["northwest", "nw"],
    &["orchard", "orch"],
    &["parkway", "pkwy", "pky"],
    &["place", "pl"],
    &["plaza", "plz"],
    &["point", "pt"],
    &["ridge", "rdg"],
    &["river", "riv"],
    &["road", "rd"],
    &["route", "rte"],
    &["south", "s"],
    &["southeast", "se"],
    &["southwest", "sw"],
    &["spring", "spg"],
    &["square", "sq"],
    &["station", "sta"],
    &["street", "st", "str"],
    &["summit", "smt"],
    &["terrace", "ter"],
    &["trail", "trl"],
    &["tunnel", "tunl"],
    &["turnpike", "tpke"],
    &["valley", "vly"],
    &["view", "vw"],
    &["village", "vlg"],
    &["west", "w"],
];

/// German street-form equivalences.
const DE: &[&[&str]] = &[
    &["strasse", "str"],
    &["platz", "pl"],
    &["gasse", "g"],
    &["weg", "wg"],
];

/// Returns the built-in classes for a language tag, if any.
#[must_use]
pub fn classes(tag: &str) -> Option<&'static [&'static [&'static str]]> {
    match tag.to_lowercase().as_str() {
        "en" => Some(EN),
        "de" => Some(DE),
        _ => None,
    }
}
