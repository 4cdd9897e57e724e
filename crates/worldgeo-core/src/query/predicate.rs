//! Predicate building for sparse search input
//!
//! A search names a handful of text columns, each optionally filled in by
//! the user. Only non-empty values become conjuncts; an empty search matches
//! the whole collection. Values never reach SQL text: the predicate renders
//! numbered placeholders and hands the values back separately for binding.

use crate::model::{FieldValue, Record};

/// One exact-match conjunct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub column: &'static str,
    pub value: String,
}

/// Conjunction of exact-match clauses over one entity's columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Build from `(column, value)` pairs, dropping unset and empty values.
    ///
    /// Clause order follows input order, so the same input always yields
    /// the same predicate.
    pub fn from_criteria<'a, I>(criteria: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
    {
        let clauses = criteria
            .into_iter()
            .filter_map(|(column, value)| match value {
                Some(v) if !v.is_empty() => Some(Clause {
                    column,
                    value: v.to_string(),
                }),
                _ => None,
            })
            .collect();
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// `WHERE a = ?1 AND b = ?2`, or an empty string when matching all
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            return String::new();
        }
        let conjuncts: Vec<String> = self
            .clauses
            .iter()
            .enumerate()
            .map(|(i, clause)| format!("{} = ?{}", clause.column, i + 1))
            .collect();
        format!("WHERE {}", conjuncts.join(" AND "))
    }

    /// Bound parameter values, aligned with the placeholders of `where_clause`
    pub fn values(&self) -> Vec<&str> {
        self.clauses.iter().map(|c| c.value.as_str()).collect()
    }

    /// Evaluate against an in-memory record.
    ///
    /// Mirrors what the store does with `where_clause`: a clause naming a
    /// column the record does not have, or a non-text column, never matches.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let fields = record.to_fields();
        self.clauses.iter().all(|clause| {
            R::DESCRIPTOR
                .position(clause.column)
                .and_then(|p| fields.get(p))
                .and_then(FieldValue::as_text)
                .is_some_and(|text| text == clause.value)
        })
    }
}
