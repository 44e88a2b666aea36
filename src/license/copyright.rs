//! Copyright author and year extraction.
//!
//! Both extractors try the same four notice shapes in a fixed order and take
//! the first occurrence of the first shape that matches:
//!
//! 1. `Copyright (c) <year> <name>`
//! 2. `Copyright © <year> <name>`
//! 3. `Copyright <year> <name>`
//! 4. `© <year> <name>`
//!
//! The author and year scans are independent, so with several copyright
//! lines in one file they may come from different lines.

use std::sync::OnceLock;

use regex::Regex;

/// Author reported when no copyright notice is found.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

const AUTHOR_PATTERNS: [&str; 4] = [
    r"(?i)copyright\s+\(c\)\s+\d+\s+(.+)",
    r"(?i)copyright\s+©\s+\d+\s+(.+)",
    r"(?i)copyright\s+\d+\s+(.+)",
    r"(?i)©\s+\d+\s+(.+)",
];

const YEAR_PATTERNS: [&str; 4] = [
    r"(?i)copyright\s+\(c\)\s+([0-9]{4})",
    r"(?i)copyright\s+©\s+([0-9]{4})",
    r"(?i)copyright\s+([0-9]{4})",
    r"(?i)©\s+([0-9]{4})",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("copyright pattern is valid"))
        .collect()
}

fn author_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    CELL.get_or_init(|| compile(&AUTHOR_PATTERNS))
}

fn year_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    CELL.get_or_init(|| compile(&YEAR_PATTERNS))
}

fn rights_reserved() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"(?i)\s+all rights reserved.*$").expect("pattern is valid"))
}

fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the copyright holder, or [`UNKNOWN_AUTHOR`].
///
/// The name runs to the end of the notice line; a trailing
/// "All rights reserved" clause is dropped.
pub fn extract_author(text: &str) -> String {
    match first_capture(author_patterns(), text) {
        Some(name) => rights_reserved().replace(name.trim(), "").into_owned(),
        None => UNKNOWN_AUTHOR.to_string(),
    }
}

/// Extract the copyright year, if the text carries one.
pub fn extract_year_detected(text: &str) -> Option<i32> {
    first_capture(year_patterns(), text).and_then(|digits| digits.parse().ok())
}

/// Extract the copyright year, falling back to `current_year`.
pub fn extract_year(text: &str, current_year: i32) -> i32 {
    extract_year_detected(text).unwrap_or(current_year)
}
