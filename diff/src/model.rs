//! Statement model: terms, literals, and the statements built from them.
//!
//! Equality on every type here is plain structural equality. Two statements
//! are the same statement exactly when subject, predicate, object and graph
//! label all compare equal; literals compare on lexical form, datatype IRI
//! and language tag (case-sensitive). No blank-node renaming or literal
//! canonicalisation is attempted.

use std::fmt;

/// `xsd:string`, the datatype of literals written without one.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `rdf:langString`, the datatype of every language-tagged literal.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Full datatype IRI.
    pub datatype: String,
    /// Language tag, present only for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Literal {
    /// Creates a literal with an explicit datatype IRI.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::typed(value, XSD_STRING)
    }

    /// Creates a language-tagged `rdf:langString` literal.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: RDF_LANG_STRING.to_string(),
            language: Some(language.into()),
        }
    }
}

/// A statement term in subject, object or graph position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A named resource.
    Iri(String),
    /// A blank node, identified by its document-local label (without `_:`).
    BlankNode(String),
    /// A literal value. Only valid in object position.
    Literal(Literal),
}

impl Term {
    /// Convenience constructor for [`Term::Iri`].
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Convenience constructor for [`Term::BlankNode`].
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Returns the raw text of the term: the IRI, the blank-node label, or
    /// the literal's lexical form.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(label) => label,
            Term::Literal(lit) => &lit.value,
        }
    }

    /// Returns the literal payload if this term is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            Term::Iri(_) | Term::BlankNode(_) => None,
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl fmt::Display for Term {
    /// N-Triples-like form, used in log output and test failure messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => match &lit.language {
                Some(lang) => write!(f, "{:?}@{lang}", lit.value),
                None => write!(f, "{:?}^^<{}>", lit.value, lit.datatype),
            },
        }
    }
}

/// A single RDF statement (triple, or quad when `graph` is set).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// IRI, blank node or literal.
    pub object: Term,
    /// Graph label for quad sources; RDF/XML never sets it.
    pub graph: Option<Term>,
}

impl Statement {
    /// Creates a triple in the default graph.
    pub fn new(subject: Term, predicate: impl Into<String>, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// Returns this statement placed in the named graph `graph`.
    #[must_use]
    pub fn in_graph(mut self, graph: Term) -> Self {
        self.graph = Some(graph);
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.subject, self.predicate, self.object)?;
        if let Some(graph) = &self.graph {
            write!(f, " {graph}")?;
        }
        f.write_str(" .")
    }
}
