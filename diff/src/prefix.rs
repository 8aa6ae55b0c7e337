//! Namespace prefix table and IRI compaction for report display.

use percent_encoding::percent_decode_str;

/// Built-in prefix table, in match order.
const BUILTIN: &[(&str, &str)] = &[
    ("imas", "https://sparql.crssnky.xyz/imasrdf/URIs/imas-schema.ttl#"),
    ("imasrdf", "https://sparql.crssnky.xyz/imasrdf/RDFs/detail/"),
    ("schema", "http://schema.org/"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
];

/// One `(short name, namespace IRI)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    /// Short name written before the colon (e.g. `"rdfs"`).
    pub name: String,
    /// Namespace IRI matched as a literal string prefix.
    pub namespace: String,
}

/// An ordered prefix table.
///
/// Matching is first-match in table order, so a namespace that is itself a
/// prefix of a later entry's namespace shadows that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMap {
    entries: Vec<Prefix>,
}

impl PrefixMap {
    /// Creates a prefix map from `(name, namespace)` pairs, preserving order.
    pub fn new<N, I>(entries: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, namespace)| Prefix {
                    name: name.into(),
                    namespace: namespace.into(),
                })
                .collect(),
        }
    }

    /// The compiled-in table used by the `rdf-diff` report.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN.iter().copied())
    }

    /// Entries in match order.
    #[must_use]
    pub fn entries(&self) -> &[Prefix] {
        &self.entries
    }

    /// Returns the first entry whose namespace starts `iri`, with the
    /// remaining local part.
    #[must_use]
    pub fn split<'a>(&self, iri: &'a str) -> Option<(&Prefix, &'a str)> {
        self.entries
            .iter()
            .find_map(|p| iri.strip_prefix(p.namespace.as_str()).map(|rest| (p, rest)))
    }

    /// Compacts `iri` to `[name:local](iri)`.
    ///
    /// The local part is percent-decoded for readability. When the decoded
    /// bytes are not UTF-8 the raw local part is kept. IRIs outside every
    /// namespace are returned unchanged. Never fails.
    #[must_use]
    pub fn compact(&self, iri: &str) -> String {
        match self.split(iri) {
            Some((prefix, local)) => {
                let local = percent_decode_str(local)
                    .decode_utf8()
                    .unwrap_or(std::borrow::Cow::Borrowed(local));
                format!("[{}:{}]({})", prefix.name, local, iri)
            }
            None => iri.to_string(),
        }
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_known_namespace() {
        let map = PrefixMap::builtin();
        let iri = "http://www.w3.org/2000/01/rdf-schema#label";
        let compact = map.compact(iri);
        assert_eq!(compact, format!("[rdfs:label]({iri})"));
        assert!(compact.contains("rdfs:label"));
        assert!(compact.contains(iri));
    }

    #[test]
    fn unknown_iri_is_unchanged() {
        let map = PrefixMap::builtin();
        assert_eq!(map.compact("http://example.org/unknown"), "http://example.org/unknown");
    }

    #[test]
    fn local_part_is_percent_decoded() {
        let map = PrefixMap::builtin();
        let iri = "https://sparql.crssnky.xyz/imasrdf/RDFs/detail/%E5%A4%A9%E6%B5%B7%E6%98%A5%E9%A6%99";
        assert_eq!(map.compact(iri), format!("[imasrdf:天海春香]({iri})"));
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw_local_part() {
        let map = PrefixMap::builtin();
        let iri = "http://schema.org/%FF%FEname";
        assert_eq!(map.compact(iri), format!("[schema:%FF%FEname]({iri})"));
    }

    #[test]
    fn malformed_escape_is_kept_verbatim() {
        let map = PrefixMap::builtin();
        let iri = "http://schema.org/100%zz";
        assert_eq!(map.compact(iri), format!("[schema:100%zz]({iri})"));
    }

    #[test]
    fn first_matching_entry_wins() {
        let map = PrefixMap::new([("ex", "http://ex.org/"), ("exv", "http://ex.org/vocab#")]);
        assert_eq!(
            map.compact("http://ex.org/vocab#name"),
            "[ex:vocab#name](http://ex.org/vocab#name)"
        );

        let reordered = PrefixMap::new([("exv", "http://ex.org/vocab#"), ("ex", "http://ex.org/")]);
        assert_eq!(
            reordered.compact("http://ex.org/vocab#name"),
            "[exv:name](http://ex.org/vocab#name)"
        );
    }

    #[test]
    fn imas_schema_matches_before_imasrdf() {
        let map = PrefixMap::builtin();
        let (prefix, local) = map
            .split("https://sparql.crssnky.xyz/imasrdf/URIs/imas-schema.ttl#Color")
            .expect("imas namespace is built in");
        assert_eq!(prefix.name, "imas");
        assert_eq!(local, "Color");
    }

    #[test]
    fn builtin_order_is_stable() {
        let names: Vec<_> = PrefixMap::builtin()
            .entries()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, ["imas", "imasrdf", "schema", "rdf", "rdfs", "xsd", "foaf"]);
    }
}
