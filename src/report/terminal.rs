use std::collections::HashMap;
use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::crawler::{CrawlOutcome, SkippedLicense};
use crate::license::classifier::{Outcome, Rule};
use crate::models::{LibraryRecord, LicenseType};

/// Render a colored terminal report of a crawl.
pub fn render(
    outcome: &CrawlOutcome,
    root: &Path,
    manifest_path: &Path,
    verbose: bool,
    quiet: bool,
) {
    let records = &outcome.records;

    if quiet {
        println!(
            "Libraries: {}  Skipped: {}  Manifest: {}",
            records.len().to_string().green(),
            outcome.skipped.len().to_string().yellow(),
            manifest_path.display(),
        );
        return;
    }

    println!(
        "\n {} v{}",
        "oss-license-detect".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Crawled: {}\n", root.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total libraries : {}", records.len()));
    println!(" │  {:<48} │", format!("Skipped files   : {}", outcome.skipped.len()));
    for (license, count) in count_by_license(records) {
        println!(" │  {:<48} │", format!("  {:<14}: {:>4}", license, count));
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    if !records.is_empty() {
        render_table(records, verbose);
        println!();
    }

    if !outcome.skipped.is_empty() {
        println!(" {} License files that could not be read:\n", "[WARN]".yellow().bold());
        render_skipped(&outcome.skipped);
        println!();
    }

    println!(" Manifest written to {}", manifest_path.display().to_string().bold());
}

fn render_table(records: &[LibraryRecord], verbose: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Library").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Author").add_attribute(Attribute::Bold),
            Cell::new("Year").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        let license_color = match record.license_type() {
            LicenseType::Other => Color::DarkGrey,
            LicenseType::Gpl2 | LicenseType::Gpl3 | LicenseType::Agpl3 => Color::Red,
            _ => Color::Green,
        };

        let year = if record.year_detected() {
            record.year().to_string()
        } else if verbose {
            format!("{} (default)", record.year())
        } else {
            "-".to_string()
        };

        table.add_row(vec![
            Cell::new(record.library_path().display()),
            Cell::new(record.license_type()).fg(license_color),
            Cell::new(record.author()),
            Cell::new(year).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn render_skipped(skipped: &[SkippedLicense]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Reason").add_attribute(Attribute::Bold),
        ]);

    for s in skipped {
        table.add_row(vec![
            Cell::new(s.path.display()),
            Cell::new(&s.reason).fg(Color::Yellow),
        ]);
    }

    println!("{}", table);
}

/// Print the classification rules in the order they are evaluated.
pub fn render_rules(rules: &[Rule]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Rule").add_attribute(Attribute::Bold),
            Cell::new("Any of").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

    for (i, rule) in rules.iter().enumerate() {
        let result = match &rule.outcome {
            Outcome::Tag(tag) => tag.to_string(),
            Outcome::Versioned(variants) => {
                let mut lines: Vec<String> = variants
                    .iter()
                    .map(|(keywords, tag)| format!("{} if {}", tag, quote_all(keywords)))
                    .collect();
                lines.push("otherwise next rule".to_string());
                lines.join("\n")
            }
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(rule.name),
            Cell::new(quote_all(rule.keywords)),
            Cell::new(result),
        ]);
    }
    table.add_row(vec![
        Cell::new(rules.len() + 1).set_alignment(CellAlignment::Right),
        Cell::new("Default"),
        Cell::new("-"),
        Cell::new(LicenseType::Other),
    ]);

    println!("{}", table);
}

fn quote_all(keywords: &[&str]) -> String {
    keywords
        .iter()
        .map(|k| format!("\"{}\"", k))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// License counts, most common first; ties keep enum declaration order.
fn count_by_license(records: &[LibraryRecord]) -> Vec<(LicenseType, usize)> {
    let mut counts: HashMap<LicenseType, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.license_type()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(LicenseType, usize)> = LicenseType::ALL
        .into_iter()
        .filter_map(|t| counts.get(&t).map(|&c| (t, c)))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
