//! File-level services built on top of the parser and exporter.

pub mod readme;

pub use readme::{splice_section, ReadmeService, UpdateSummary};
