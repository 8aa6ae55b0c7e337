//! One-to-one statement matching between two graph snapshots.
//!
//! Both inputs are treated as multisets: each old statement cancels at most
//! one equal new statement, always the earliest one not yet cancelled.
//! Surplus copies on either side survive into the result, in their original
//! relative order.

use std::collections::{HashMap, VecDeque};

use crate::model::Statement;

/// Statements only in the new graph (`added`) and only in the old graph
/// (`deleted`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Unmatched statements of the new graph, in new-graph order.
    pub added: Vec<Statement>,
    /// Unmatched statements of the old graph, in old-graph order.
    pub deleted: Vec<Statement>,
}

impl Diff {
    /// True when the two graphs held the same multiset of statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }
}

/// Partitions `old` and `new` into added and deleted statements.
///
/// Equivalent to scanning `new` from the front for the first equal,
/// unconsumed statement for every statement of `old`, but buckets `new` by
/// statement so each lookup is a hash probe instead of a linear scan.
#[must_use]
pub fn diff(old: &[Statement], new: &[Statement]) -> Diff {
    let mut pending: HashMap<&Statement, VecDeque<usize>> = HashMap::with_capacity(new.len());
    for (j, stmt) in new.iter().enumerate() {
        pending.entry(stmt).or_default().push_back(j);
    }

    let mut new_consumed = vec![false; new.len()];
    let mut deleted = Vec::new();

    for stmt in old {
        match pending.get_mut(stmt).and_then(VecDeque::pop_front) {
            Some(j) => new_consumed[j] = true,
            None => deleted.push(stmt.clone()),
        }
    }

    let added = new
        .iter()
        .zip(&new_consumed)
        .filter(|&(_, &consumed)| !consumed)
        .map(|(stmt, _)| stmt.clone())
        .collect();

    Diff { added, deleted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, Term};
    use proptest::prelude::*;

    fn stmt(s: &str, p: &str, o: &str) -> Statement {
        Statement::new(
            Term::iri(format!("http://ex.org/{s}")),
            format!("http://ex.org/{p}"),
            Literal::plain(o),
        )
    }

    /// Literal first-match scan with explicit consumed flags.
    fn naive(old: &[Statement], new: &[Statement]) -> Diff {
        let mut old_consumed = vec![false; old.len()];
        let mut new_consumed = vec![false; new.len()];
        for (i, a) in old.iter().enumerate() {
            if let Some(j) = (0..new.len()).find(|&j| !new_consumed[j] && new[j] == *a) {
                old_consumed[i] = true;
                new_consumed[j] = true;
            }
        }
        let keep = |items: &[Statement], consumed: &[bool]| -> Vec<Statement> {
            items
                .iter()
                .zip(consumed)
                .filter(|(_, c)| !**c)
                .map(|(s, _)| s.clone())
                .collect()
        };
        Diff {
            added: keep(new, &new_consumed),
            deleted: keep(old, &old_consumed),
        }
    }

    #[test]
    fn identical_graphs_have_no_diff() {
        let g = vec![stmt("a", "p", "1"), stmt("b", "p", "2")];
        assert!(diff(&g, &g).is_empty());
    }

    #[test]
    fn reordered_graphs_have_no_diff() {
        let old = vec![stmt("a", "p", "1"), stmt("b", "p", "2"), stmt("c", "q", "3")];
        let new = vec![stmt("c", "q", "3"), stmt("a", "p", "1"), stmt("b", "p", "2")];
        assert!(diff(&old, &new).is_empty());
    }

    #[test]
    fn surplus_old_duplicate_is_deleted_once() {
        let s = stmt("a", "p", "1");
        let d = diff(&[s.clone(), s.clone()], &[s.clone()]);
        assert!(d.added.is_empty());
        assert_eq!(d.deleted, vec![s]);
    }

    #[test]
    fn surplus_new_duplicate_is_added_once() {
        let s = stmt("a", "p", "1");
        let d = diff(&[s.clone()], &[s.clone(), s.clone()]);
        assert_eq!(d.added, vec![s]);
        assert!(d.deleted.is_empty());
    }

    #[test]
    fn changed_literal_is_one_add_and_one_delete() {
        let old = vec![stmt("Alice", "name", "Alice")];
        let new = vec![stmt("Alice", "name", "Alicia")];
        let d = diff(&old, &new);
        assert_eq!(d.added, new);
        assert_eq!(d.deleted, old);
    }

    #[test]
    fn datatype_and_language_break_equality() {
        let s = Term::iri("http://ex.org/s");
        let p = "http://ex.org/p";
        let old = vec![Statement::new(s.clone(), p, Literal::lang("x", "en"))];
        let new = vec![Statement::new(s, p, Literal::plain("x"))];
        let d = diff(&old, &new);
        assert_eq!(d.added.len(), 1);
        assert_eq!(d.deleted.len(), 1);
    }

    #[test]
    fn unmatched_statements_keep_input_order() {
        let old = vec![stmt("z", "p", "1"), stmt("k", "p", "1"), stmt("a", "p", "1")];
        let new = vec![stmt("y", "p", "1"), stmt("k", "p", "1"), stmt("b", "p", "1")];
        let d = diff(&old, &new);
        assert_eq!(d.deleted, vec![stmt("z", "p", "1"), stmt("a", "p", "1")]);
        assert_eq!(d.added, vec![stmt("y", "p", "1"), stmt("b", "p", "1")]);
    }

    #[test]
    fn empty_inputs() {
        let g = vec![stmt("a", "p", "1")];
        assert_eq!(diff(&[], &g).added, g);
        assert_eq!(diff(&g, &[]).deleted, g);
        assert!(diff(&[], &[]).is_empty());
    }

    fn small_graph() -> impl Strategy<Value = Vec<Statement>> {
        // A tiny alphabet forces plenty of duplicates and collisions.
        prop::collection::vec(
            (0u8..3, 0u8..2, 0u8..3).prop_map(|(s, p, o)| {
                stmt(&format!("s{s}"), &format!("p{p}"), &format!("o{o}"))
            }),
            0..12,
        )
    }

    fn counts(items: &[Statement]) -> HashMap<&Statement, usize> {
        let mut m = HashMap::new();
        for s in items {
            *m.entry(s).or_insert(0) += 1;
        }
        m
    }

    proptest! {
        #[test]
        fn matches_naive_first_match(old in small_graph(), new in small_graph()) {
            prop_assert_eq!(diff(&old, &new), naive(&old, &new));
        }

        #[test]
        fn self_diff_is_empty(g in small_graph()) {
            prop_assert!(diff(&g, &g).is_empty());
        }

        #[test]
        fn old_minus_deleted_plus_added_is_new(old in small_graph(), new in small_graph()) {
            let d = diff(&old, &new);
            let mut rebuilt: Vec<Statement> = Vec::new();
            let mut to_remove = counts(&d.deleted);
            for s in &old {
                match to_remove.get_mut(s) {
                    Some(n) if *n > 0 => *n -= 1,
                    _ => rebuilt.push(s.clone()),
                }
            }
            rebuilt.extend(d.added.iter().cloned());
            prop_assert_eq!(counts(&rebuilt), counts(&new));
        }

        #[test]
        fn no_statement_is_both_added_and_deleted(old in small_graph(), new in small_graph()) {
            let d = diff(&old, &new);
            for s in &d.added {
                prop_assert!(!d.deleted.contains(s));
            }
        }
    }
}
