//! Grouping of a [`Diff`](crate::Diff) into per-subject display rows.

use std::fmt;

use indexmap::IndexMap;

use crate::model::{Statement, Term};
use crate::prefix::PrefixMap;

/// Change marker shown in the first column of a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Statement present only in the new graph.
    Added,
    /// Statement present only in the old graph.
    Deleted,
}

impl Marker {
    /// `"+"` or `"-"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Added => "+",
            Marker::Deleted => "-",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One display row: marker, property, value, datatype, language tag.
///
/// Datatype and language are empty strings for non-literal objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Added or deleted.
    pub marker: Marker,
    /// Compacted predicate IRI.
    pub property: String,
    /// Compacted object IRI, blank-node label, or literal lexical form.
    pub value: String,
    /// Compacted literal datatype, or empty.
    pub datatype: String,
    /// Literal language tag, or empty.
    pub language: String,
}

impl ReportRow {
    /// Builds the row for `stmt`.
    ///
    /// Literal values are shown verbatim; only IRIs are compacted.
    #[must_use]
    pub fn new(marker: Marker, stmt: &Statement, prefixes: &PrefixMap) -> Self {
        let (value, datatype, language) = match &stmt.object {
            Term::Iri(iri) => (prefixes.compact(iri), String::new(), String::new()),
            Term::BlankNode(label) => (label.clone(), String::new(), String::new()),
            Term::Literal(lit) => (
                lit.value.clone(),
                prefixes.compact(&lit.datatype),
                lit.language.clone().unwrap_or_default(),
            ),
        };
        Self {
            marker,
            property: prefixes.compact(&stmt.predicate),
            value,
            datatype,
            language,
        }
    }

    /// The five table cells in column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.marker.as_str(),
            &self.property,
            &self.value,
            &self.datatype,
            &self.language,
        ]
    }
}

/// Rows grouped by subject, in first-seen subject order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    groups: IndexMap<Term, Vec<ReportRow>>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `row` to the group of `subject`, opening the group if this is
    /// the subject's first row.
    pub fn push(&mut self, subject: &Term, row: ReportRow) {
        match self.groups.get_mut(subject) {
            Some(rows) => rows.push(row),
            None => {
                self.groups.insert(subject.clone(), vec![row]);
            }
        }
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&Term, &[ReportRow])> {
        self.groups.iter().map(|(subject, rows)| (subject, rows.as_slice()))
    }

    /// Number of subject groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups `added` then `deleted` statements by subject.
///
/// All added rows are pushed before any deleted row, so subjects first seen
/// among added statements come first, and within one subject added rows
/// precede deleted rows. No sorting is applied.
#[must_use]
pub fn group(added: &[Statement], deleted: &[Statement], prefixes: &PrefixMap) -> Report {
    let mut report = Report::new();
    let marked = added
        .iter()
        .map(|s| (Marker::Added, s))
        .chain(deleted.iter().map(|s| (Marker::Deleted, s)));
    for (marker, stmt) in marked {
        report.push(&stmt.subject, ReportRow::new(marker, stmt, prefixes));
    }
    report
}
