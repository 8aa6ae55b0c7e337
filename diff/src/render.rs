//! Markdown rendering of a grouped [`Report`].

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{ContentArrangement, Table};

use crate::model::Term;
use crate::prefix::PrefixMap;
use crate::report::Report;

/// Column headings of every subject table.
pub const HEADER: [&str; 5] = ["", "Property", "Value", "rdf:datatype", "xml:lang"];

/// Formats a left-aligned markdown pipe table.
///
/// Rows are emitted in the given order; empty cells stay empty. Cell text
/// goes through [`escape_cell`], so every input row is exactly one table line.
#[must_use]
pub fn format_table<'a, R>(header: &[&str], rows: impl IntoIterator<Item = R>) -> String
where
    R: IntoIterator<Item = &'a str>,
{
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row.into_iter().map(escape_cell).collect::<Vec<_>>());
    }
    table.to_string()
}

/// Makes `cell` safe inside one markdown table cell: line breaks become
/// `<br>` and pipes are backslash-escaped.
#[must_use]
pub fn escape_cell(cell: &str) -> String {
    cell.replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
        .replace('|', "\\|")
}

/// Heading text for a subject: compacted IRI, or the blank-node label.
#[must_use]
pub fn subject_heading(subject: &Term, prefixes: &PrefixMap) -> String {
    match subject {
        Term::Iri(iri) => prefixes.compact(iri),
        Term::BlankNode(_) | Term::Literal(_) => subject.value().to_string(),
    }
}

/// Renders every group as a `###` heading, a blank line, the row table and
/// a trailing blank line. Groups without rows produce no output.
#[must_use]
pub fn render(report: &Report, prefixes: &PrefixMap) -> String {
    let mut out = String::new();
    for (subject, rows) in report.groups() {
        if rows.is_empty() {
            continue;
        }
        out.push_str("### ");
        out.push_str(&subject_heading(subject, prefixes));
        out.push_str("\n\n");
        out.push_str(&format_table(&HEADER, rows.iter().map(|r| r.cells())));
        out.push_str("\n\n");
    }
    out
}
