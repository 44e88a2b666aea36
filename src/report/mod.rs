//! Report renderers for crawl results.
//!
//! - [`terminal`]: colored summary box and per-library table; respects `--verbose` / `--quiet`.

pub mod terminal;
