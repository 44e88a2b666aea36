//! License text analysis.
//!
//! - [`classifier`]: maps raw `LICENSE` text onto a [`LicenseType`](crate::models::LicenseType)
//!   through an ordered keyword rule table.
//! - [`copyright`]: pulls the copyright holder and year out of the text.

pub mod classifier;
pub mod copyright;
