//! Static normalization vocabularies.
//!
//! The rewrite rules are ordered and first-match-wins, so every table here is
//! a slice, not a map: iteration order is the rule precedence.

/// Separator tokens scanned in order by the accident-side normalizer.
/// Only the FIRST separator found in a name is ever substituted.
pub static SEPARATORS: &[&str] = &["/", "-", "&", " and ", " and", "and ", ","];

/// Organizational and vehicle-type words stripped from accident-side
/// manufacturer names. Every entry is applied, in order, as three removals:
/// `" word"`, `"word "`, then the bare `"word"`.
pub static ORG_WORDS: &[&str] = &[
    "helicopter",
    "aircraft",
    "aviation",
    "gmbh",
    "co.",
    "llc",
    "leasing",
    "limited",
    "ltd",
    "inc",
    "corp",
    "corporation",
    "company",
    "sa",
    "sas",
    "bv",
    "plc",
    "pte",
    "kg",
    "aviacija",
    "balloon",
    "balloons",
];

/// Alias table for inventory-side manufacturer names: `(canonical, triggers)`.
/// The first entry with any trigger substring present in the name wins and
/// short-circuits the remaining rules.
pub static INVENTORY_ALIASES: &[(&str, &[&str])] = &[
    ("boeing", &["boeing"]),
    ("mcdonnell douglas", &["mcd", "md"]),
    ("raytheon", &["raetheon"]),
    ("airbus", &["airbus", "industr", "company"]),
    ("gecas", &["gecas"]),
    ("alitalia", &["alitalia"]),
    ("alc", &["alc"]),
    ("learjet", &["lear"]),
    ("saab", &["saab aircraft", "saabaircraft"]),
    ("jplease", &["jplease"]),
    ("beechcraft", &["beech"]),
    ("smbc", &["smbc"]),
    ("gulfstreamaerospace", &["gulf"]),
    ("unknown", &["kuban oakhill"]),
    ("dassault", &["dassult"]),
    ("douglas", &["douglas"]),
    ("iailtd", &["israelaircraftindustries"]),
    ("fokker", &["fokker"]),
    ("bombardier", &["bombardier"]),
];
