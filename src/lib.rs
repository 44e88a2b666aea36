//! `oss-license-detect`: find bundled `LICENSE` files, classify them and
//! record their copyright holder and year.
//!
//! # Flow
//! 1. Walk a directory tree ([`crawler::crawl`]).
//! 2. For each `LICENSE`, build a [`models::LibraryRecord`]: the license family
//!    comes from [`license::classifier::classify`], author and year from
//!    [`license::copyright`].
//! 3. Write all records to a JSON manifest ([`manifest::write_manifest`]).
//!
//! ```no_run
//! use std::path::Path;
//! use oss_license_detect::crawler::{crawl, CrawlOptions};
//! use oss_license_detect::manifest::write_manifest;
//!
//! # fn main() -> oss_license_detect::error::Result<()> {
//! let outcome = crawl(Path::new("third_party"), &CrawlOptions::default(), 2024);
//! let manifest = write_manifest(&outcome.records, Path::new("manifest.json"))?;
//! println!("{} libraries", manifest.total_libraries);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod license;
pub mod manifest;
pub mod models;
pub mod report;

pub use crawler::{crawl, CrawlOptions, CrawlOutcome};
pub use error::{Result, ScanError};
pub use manifest::{write_manifest, Manifest};
pub use models::{LibraryRecord, LicenseType};
