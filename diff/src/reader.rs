//! Loading graph snapshots from files.
//!
//! The syntax is chosen from the file extension: `.ttl` is Turtle, `.nt` is
//! N-Triples, everything else is read as RDF/XML. Parsing is done by the
//! sophia toolkit; its terms are converted into owned [`Statement`]s so the
//! rest of the crate never sees parser types.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;

use crate::error::ReadError;
use crate::model::{Literal, Statement, Term};

/// Produces the full statement list of a graph file.
pub trait GraphReader: Send + Sync {
    /// Reads every statement of the graph at `path`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError`] if the file cannot be read or parsed.
    fn read(&self, path: &Path) -> Result<Vec<Statement>, ReadError>;
}

/// RDF concrete syntaxes understood by [`FileReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// RDF/XML (the default).
    RdfXml,
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Syntax {
    /// Picks the syntax from the extension of `path`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("ttl") => Syntax::Turtle,
            Some("nt") => Syntax::NTriples,
            _ => Syntax::RdfXml,
        }
    }
}

/// [`GraphReader`] over local files, backed by sophia parsers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl GraphReader for FileReader {
    fn read(&self, path: &Path) -> Result<Vec<Statement>, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let input = BufReader::new(file);
        let syntax = Syntax::from_path(path);

        let statements = match syntax {
            Syntax::RdfXml => collect(sophia_xml::parser::parse_bufread(input), path)?,
            Syntax::Turtle => collect(sophia_turtle::parser::turtle::parse_bufread(input), path)?,
            Syntax::NTriples => collect(sophia_turtle::parser::nt::parse_bufread(input), path)?,
        };

        tracing::debug!(
            path = %path.display(),
            ?syntax,
            statements = statements.len(),
            "graph read"
        );
        Ok(statements)
    }
}

/// Drains a triple source into owned statements.
fn collect<S: TripleSource>(mut source: S, path: &Path) -> Result<Vec<Statement>, ReadError> {
    let mut statements = Vec::new();
    let mut unsupported: Option<String> = None;

    source
        .for_each_triple(|t| {
            if unsupported.is_some() {
                return;
            }
            match statement(&t) {
                Ok(stmt) => statements.push(stmt),
                Err(term) => unsupported = Some(term),
            }
        })
        .map_err(|e| ReadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match unsupported {
        Some(term) => Err(ReadError::UnsupportedTerm {
            path: path.to_path_buf(),
            term,
        }),
        None => Ok(statements),
    }
}

fn statement<T: SophiaTriple>(t: &T) -> Result<Statement, String> {
    let predicate = t
        .p()
        .iri()
        .map(|iri| iri.as_str().to_string())
        .ok_or_else(|| format!("{:?}", t.p().kind()))?;
    Ok(Statement {
        subject: term(t.s())?,
        predicate,
        object: term(t.o())?,
        graph: None,
    })
}

/// Converts a parser term; the error carries the unsupported term kind.
fn term<T: SophiaTerm>(t: T) -> Result<Term, String> {
    match t.kind() {
        TermKind::Iri => t
            .iri()
            .map(|iri| Term::Iri(iri.as_str().to_string()))
            .ok_or_else(|| "IRI without text".to_string()),
        TermKind::BlankNode => t
            .bnode_id()
            .map(|id| Term::BlankNode(id.as_str().to_string()))
            .ok_or_else(|| "blank node without label".to_string()),
        TermKind::Literal => {
            let value = t.lexical_form().map(|v| v.to_string()).unwrap_or_default();
            let datatype = t
                .datatype()
                .map(|dt| dt.as_str().to_string())
                .unwrap_or_else(|| crate::model::XSD_STRING.to_string());
            Ok(Term::Literal(Literal {
                value,
                datatype,
                language: t.language_tag().map(|tag| tag.as_str().to_string()),
            }))
        }
        other => Err(format!("{other:?}")),
    }
}
