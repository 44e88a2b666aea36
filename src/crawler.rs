use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::models::LibraryRecord;

/// File name that marks a library directory. Matched exactly.
pub const LICENSE_FILE_NAME: &str = "LICENSE";

#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    pub follow_links: bool,
    /// Directory names that are not descended into. The root is always walked.
    pub exclude: Vec<String>,
}

impl From<&ScanConfig> for CrawlOptions {
    fn from(cfg: &ScanConfig) -> Self {
        CrawlOptions {
            follow_links: cfg.follow_links,
            exclude: cfg.exclude.clone(),
        }
    }
}

/// A `LICENSE` file that was found but could not be turned into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLicense {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// One record per readable `LICENSE`, in traversal order.
    pub records: Vec<LibraryRecord>,
    pub skipped: Vec<SkippedLicense>,
}

/// Walk `root` and build a record for every directory holding a `LICENSE`.
pub fn crawl(root: &Path, options: &CrawlOptions, current_year: i32) -> CrawlOutcome {
    crawl_with(root, options, current_year, |_| {})
}

/// Like [`crawl`], calling `on_license` with the path of each `LICENSE`
/// before it is read.
///
/// The walk is depth-first and pre-order. Within a directory, files come
/// before subdirectories and both are sorted by name, so a directory's
/// record always precedes the records of its subdirectories and the order
/// is stable between runs.
pub fn crawl_with<F>(
    root: &Path,
    options: &CrawlOptions,
    current_year: i32,
    mut on_license: F,
) -> CrawlOutcome
where
    F: FnMut(&Path),
{
    let mut outcome = CrawlOutcome::default();

    if !root.is_dir() {
        warn!("{} is not an existing directory", root.display());
        return outcome;
    }

    info!("Crawling {}", root.display());

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, &options.exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping directory entry: {}", err);
                continue;
            }
        };

        // Anything that is not a directory is read, so dangling links end
        // up in `skipped`.
        if entry.file_name() != LICENSE_FILE_NAME || entry.path().is_dir() {
            continue;
        }

        let license_path = entry.path();
        on_license(license_path);

        match LibraryRecord::from_file(license_path, current_year) {
            Ok(record) => {
                debug!(
                    "{} -> {} ({}, {})",
                    license_path.display(),
                    record.license_type(),
                    record.author(),
                    record.year()
                );
                outcome.records.push(record);
            }
            Err(err) => {
                warn!("Error processing {}: {}", license_path.display(), err);
                outcome.skipped.push(SkippedLicense {
                    path: license_path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        }
    }

    info!("Total libraries found: {}", outcome.records.len());
    outcome
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| exclude.iter().any(|e| e == name))
            .unwrap_or(false)
}
