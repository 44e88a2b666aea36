//! The aggregate JSON manifest written at the end of a crawl.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::models::{LibraryRecord, LicenseType};

/// Projection of a [`LibraryRecord`] as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub author: String,
    pub year: i32,
    pub oss_type: LicenseType,
    pub raw_license_text: String,
}

impl From<&LibraryRecord> for LibraryEntry {
    fn from(record: &LibraryRecord) -> Self {
        LibraryEntry {
            author: record.author().to_string(),
            year: record.year(),
            oss_type: record.license_type(),
            raw_license_text: record.raw_text().to_string(),
        }
    }
}

/// `library_object_list` and `library_paths` are index-aligned and both
/// `total_libraries` long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub library_object_list: Vec<LibraryEntry>,
    pub total_libraries: usize,
    pub library_paths: Vec<String>,
}

impl Manifest {
    pub fn from_records(records: &[LibraryRecord]) -> Self {
        Manifest {
            library_object_list: records.iter().map(LibraryEntry::from).collect(),
            total_libraries: records.len(),
            library_paths: records
                .iter()
                .map(|r| r.library_path().to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total_libraries == self.library_object_list.len()
            && self.total_libraries == self.library_paths.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `destination`, replacing any existing file.
    pub fn write(&self, destination: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(destination, json).map_err(|source| ScanError::Write {
            path: destination.to_path_buf(),
            source,
        })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScanError::Deserialize {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Build a manifest from `records` and write it to `destination`.
pub fn write_manifest(records: &[LibraryRecord], destination: &Path) -> Result<Manifest> {
    let manifest = Manifest::from_records(records);
    manifest.write(destination)?;
    Ok(manifest)
}
