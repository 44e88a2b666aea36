use crate::models::LicenseType;

/// What a rule yields once its keywords are found.
#[derive(Debug)]
pub enum Outcome {
    /// Always this tag.
    Tag(LicenseType),
    /// The first variant whose keywords also appear. If none do the rule
    /// yields nothing and classification moves on to the next rule.
    Versioned(&'static [(&'static [&'static str], LicenseType)]),
}

/// A keyword rule matched against lowercased license text.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    /// The rule fires when any of these substrings is present.
    pub keywords: &'static [&'static str],
    pub outcome: Outcome,
}

impl Rule {
    fn apply(&self, lower: &str) -> Option<LicenseType> {
        if !contains_any(lower, self.keywords) {
            return None;
        }
        match &self.outcome {
            Outcome::Tag(tag) => Some(*tag),
            Outcome::Versioned(variants) => variants
                .iter()
                .find(|(keywords, _)| contains_any(lower, keywords))
                .map(|(_, tag)| *tag),
        }
    }
}

/// Classification rules in precedence order; the first rule that yields a
/// tag wins.
///
/// No rule produces LGPL, MPL, EPL, CDDL, CC0 or AGPL. Texts of those
/// licenses end up as [`LicenseType::Other`], or as GPL when they quote the
/// GNU GPL with a version number.
static RULES: &[Rule] = &[
    Rule {
        name: "MIT",
        keywords: &["mit license", "permission is hereby granted"],
        outcome: Outcome::Tag(LicenseType::Mit),
    },
    Rule {
        name: "Apache",
        keywords: &["apache license", "apache-2.0"],
        outcome: Outcome::Tag(LicenseType::Apache2),
    },
    Rule {
        name: "GPL",
        keywords: &["gnu general public license", "gpl"],
        outcome: Outcome::Versioned(&[
            (&["version 3", "gpl-3"], LicenseType::Gpl3),
            (&["version 2", "gpl-2"], LicenseType::Gpl2),
        ]),
    },
    Rule {
        name: "BSD 3-Clause",
        keywords: &["bsd 3-clause", "3 clause"],
        outcome: Outcome::Tag(LicenseType::Bsd3Clause),
    },
    Rule {
        name: "BSD 2-Clause",
        keywords: &["bsd 2-clause", "2 clause"],
        outcome: Outcome::Tag(LicenseType::Bsd2Clause),
    },
    Rule {
        name: "ISC",
        keywords: &["isc license", "internet systems consortium"],
        outcome: Outcome::Tag(LicenseType::Isc),
    },
    Rule {
        name: "Unlicense",
        keywords: &["unlicense", "public domain"],
        outcome: Outcome::Tag(LicenseType::Unlicense),
    },
];

/// The ordered rule table used by [`classify`].
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Classify the full text of a license file.
///
/// Matching is by lowercase substring, so a license that merely mentions
/// another one (e.g. in a compatibility clause) can be tagged as that other
/// license. Returns [`LicenseType::Other`] when no rule matches.
pub fn classify(text: &str) -> LicenseType {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find_map(|rule| rule.apply(&lower))
        .unwrap_or(LicenseType::Other)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
