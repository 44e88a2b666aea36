use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::license::classifier::classify;
use crate::license::copyright::{extract_author, extract_year_detected};

/// License families a `LICENSE` file can be tagged with.
///
/// Only a subset is reachable from [`classify`]: `LGPL-3.0`, `LGPL-2.1`,
/// `MPL-2.0`, `EPL-2.0`, `CDDL-1.1`, `CC0-1.0` and `AGPL-3.0` have no
/// classification rule. They still round-trip through manifests and
/// [`LicenseType::from_spdx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "GPL-2.0")]
    Gpl2,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "LGPL-3.0")]
    Lgpl3,
    #[serde(rename = "LGPL-2.1")]
    Lgpl21,
    #[serde(rename = "MPL-2.0")]
    Mpl2,
    #[serde(rename = "EPL-2.0")]
    Epl2,
    #[serde(rename = "CDDL-1.1")]
    Cddl11,
    #[serde(rename = "CC0-1.0")]
    Cc01,
    #[serde(rename = "AGPL-3.0")]
    Agpl3,
    #[serde(rename = "Unlicense")]
    Unlicense,
    #[serde(rename = "Other")]
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 16] = [
        LicenseType::Mit,
        LicenseType::Apache2,
        LicenseType::Gpl3,
        LicenseType::Gpl2,
        LicenseType::Bsd3Clause,
        LicenseType::Bsd2Clause,
        LicenseType::Isc,
        LicenseType::Lgpl3,
        LicenseType::Lgpl21,
        LicenseType::Mpl2,
        LicenseType::Epl2,
        LicenseType::Cddl11,
        LicenseType::Cc01,
        LicenseType::Agpl3,
        LicenseType::Unlicense,
        LicenseType::Other,
    ];

    /// External tag written to the manifest's `oss_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Mit => "MIT",
            LicenseType::Apache2 => "Apache-2.0",
            LicenseType::Gpl3 => "GPL-3.0",
            LicenseType::Gpl2 => "GPL-2.0",
            LicenseType::Bsd3Clause => "BSD-3-Clause",
            LicenseType::Bsd2Clause => "BSD-2-Clause",
            LicenseType::Isc => "ISC",
            LicenseType::Lgpl3 => "LGPL-3.0",
            LicenseType::Lgpl21 => "LGPL-2.1",
            LicenseType::Mpl2 => "MPL-2.0",
            LicenseType::Epl2 => "EPL-2.0",
            LicenseType::Cddl11 => "CDDL-1.1",
            LicenseType::Cc01 => "CC0-1.0",
            LicenseType::Agpl3 => "AGPL-3.0",
            LicenseType::Unlicense => "Unlicense",
            LicenseType::Other => "Other",
        }
    }

    /// Map an SPDX-style identifier onto a license family.
    ///
    /// Matching is case-insensitive and ignores the `-only` / `-or-later`
    /// suffixes, so `GPL-3.0-or-later` maps to [`LicenseType::Gpl3`].
    /// Anything unrecognised is [`LicenseType::Other`].
    pub fn from_spdx(id: &str) -> LicenseType {
        let trimmed = id.trim();
        let base = trimmed
            .strip_suffix("-only")
            .or_else(|| trimmed.strip_suffix("-or-later"))
            .unwrap_or(trimmed);

        LicenseType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(base))
            .unwrap_or(LicenseType::Other)
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LicenseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LicenseType::from_spdx(s))
    }
}

/// One classified `LICENSE` file and the directory it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryRecord {
    author: String,
    year: i32,
    year_detected: bool,
    license_type: LicenseType,
    raw_text: String,
    library_path: PathBuf,
}

impl LibraryRecord {
    /// Classify `text` and extract its copyright line.
    ///
    /// `current_year` is used when no copyright year can be found.
    pub fn from_text(text: String, library_path: PathBuf, current_year: i32) -> Self {
        let detected = extract_year_detected(&text);
        LibraryRecord {
            author: extract_author(&text),
            year: detected.unwrap_or(current_year),
            year_detected: detected.is_some(),
            license_type: classify(&text),
            raw_text: text,
            library_path,
        }
    }

    /// Read a license file and build a record for its parent directory.
    pub fn from_file(license_path: &Path, current_year: i32) -> Result<Self> {
        let bytes = std::fs::read(license_path).map_err(|source| ScanError::Read {
            path: license_path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ScanError::Encoding {
            path: license_path.to_path_buf(),
        })?;
        if text.is_empty() {
            return Err(ScanError::EmptyLicense {
                path: license_path.to_path_buf(),
            });
        }

        let library_path = license_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(LibraryRecord::from_text(text, library_path, current_year))
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `false` when [`year`](Self::year) is the fallback rather than a
    /// value read from the text.
    pub fn year_detected(&self) -> bool {
        self.year_detected
    }

    pub fn license_type(&self) -> LicenseType {
        self.license_type
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn library_path(&self) -> &Path {
        &self.library_path
    }
}
