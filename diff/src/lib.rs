//! Statement-level diff of two RDF graph snapshots.
//!
//! The `rdf-diff` crate reads two versions of a graph, pairs up equal
//! statements one-to-one, and reports what is left over: statements only in
//! the new graph are *added*, statements only in the old graph are
//! *deleted*. The report is grouped by subject and rendered as markdown,
//! one `###` section and pipe table per subject.
//!
//! # Entry Point
//!
//! ```no_run
//! # async fn demo() -> Result<(), rdf_diff::DiffError> {
//! use std::path::Path;
//!
//! let mut out = std::io::stdout();
//! let diff = rdf_diff::run(Path::new("old.rdf"), Path::new("new.rdf"), &mut out).await?;
//! if diff.is_empty() {
//!     // nothing was printed
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! | Stage | Function |
//! |-------|----------|
//! | read   | [`GraphReader::read`] |
//! | diff   | [`diff()`] |
//! | group  | [`group`] |
//! | render | [`render()`] |
//!
//! Only exact statement equality is used: blank nodes are compared by
//! label, and literals by lexical form, datatype and language tag.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod differ;
pub mod error;
pub mod model;
pub mod prefix;
pub mod reader;
pub mod render;
pub mod report;
pub mod run;

pub use differ::{diff, Diff};
pub use error::{DiffError, ReadError};
pub use model::{Literal, Statement, Term};
pub use prefix::PrefixMap;
pub use reader::{FileReader, GraphReader, Syntax};
pub use render::render;
pub use report::{group, Marker, Report, ReportRow};
pub use run::{run, run_with};
