//! # Choice Lookups
//!
//! Menus show people labels ("Jane Doe", "Engineering"), the database wants ids. A
//! [`Lookup`] holds both sides for one choice prompt: the ordered label list handed to the
//! prompt, and the `(label, id)` pairs used afterwards to turn the chosen label back into a
//! foreign key.
//!
//! ## Ordering and duplicates
//!
//! Labels keep the order of the rows they were built from; nothing is sorted or
//! deduplicated. Two employees called "Jane Doe" show up as two identical menu entries and
//! [`resolve`] always answers with the first one. This is the accepted tie-break.
//!
//! ## Three outcomes
//!
//! Resolution distinguishes a real id, an explicit null (the managers list's "None"
//! sentinel), and a label that is not in the list at all. The last one means the list
//! changed under us and is an error, never "no manager".

use crate::error::{Result, TrackerError};
use crate::model::Id;
use tracing::error;

/// Label of the sentinel entry meaning "no manager".
pub const NO_MANAGER_LABEL: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Id(Id),
    Null,
    NotFound,
}

impl Resolution {
    /// Turn the outcome into a nullable id, failing on [`Resolution::NotFound`].
    pub fn into_result(self, kind: &'static str, label: &str) -> Result<Option<Id>> {
        match self {
            Resolution::Id(id) => Ok(Some(id)),
            Resolution::Null => Ok(None),
            Resolution::NotFound => {
                error!(kind, label, "chosen label is not in the lookup, write aborted");
                Err(TrackerError::Unresolved {
                    kind,
                    label: label.to_string(),
                })
            }
        }
    }

    /// Like [`Resolution::into_result`] but for foreign keys that may not be null.
    pub fn into_required(self, kind: &'static str, label: &str) -> Result<Id> {
        self.into_result(kind, label)?.ok_or_else(|| TrackerError::Unresolved {
            kind,
            label: label.to_string(),
        })
    }
}

/// Labels for a choice prompt plus the pairs to map a choice back to its row id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    labels: Vec<String>,
    pairs: Vec<(String, Option<Id>)>,
}

impl Lookup {
    /// Build a lookup from rows, one label and one pair per row, in row order.
    pub fn build<T, L, I>(rows: &[T], label_fn: L, id_fn: I) -> Self
    where
        L: Fn(&T) -> String,
        I: Fn(&T) -> Id,
    {
        let mut lookup = Self {
            labels: Vec::with_capacity(rows.len()),
            pairs: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            lookup.push(label_fn(row), Some(id_fn(row)));
        }
        lookup
    }

    /// Append an entry at the end of both lists.
    pub fn push(&mut self, label: impl Into<String>, id: Option<Id>) {
        let label = label.into();
        self.labels.push(label.clone());
        self.pairs.push((label, id));
    }

    /// Append the `("None", null)` sentinel.
    pub fn with_none_sentinel(mut self) -> Self {
        self.push(NO_MANAGER_LABEL, None);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn pairs(&self) -> &[(String, Option<Id>)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn resolve(&self, label: &str) -> Resolution {
        resolve(label, &self.pairs)
    }
}

/// Id of the first pair whose label equals `label`.
pub fn resolve(label: &str, pairs: &[(String, Option<Id>)]) -> Resolution {
    match pairs.iter().find(|(candidate, _)| candidate == label) {
        Some((_, Some(id))) => Resolution::Id(*id),
        Some((_, None)) => Resolution::Null,
        None => Resolution::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<(Id, String)> {
        (0..n).map(|i| (i as Id + 10, format!("name-{}", i))).collect()
    }

    fn build(rows: &[(Id, String)]) -> Lookup {
        Lookup::build(rows, |r| r.1.clone(), |r| r.0)
    }

    #[test]
    fn lengths_match_and_order_is_preserved() {
        for n in 0..25 {
            let rows = names(n);
            let lookup = build(&rows);
            assert_eq!(lookup.labels().len(), n);
            assert_eq!(lookup.pairs().len(), n);
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(lookup.labels()[i], row.1);
                assert_eq!(lookup.pairs()[i], (row.1.clone(), Some(row.0)));
            }
        }
    }

    #[test]
    fn keeps_duplicate_labels() {
        let rows = vec![(1, "Jane Doe".to_string()), (2, "Jane Doe".to_string())];
        let lookup = build(&rows);
        assert_eq!(lookup.labels(), &["Jane Doe", "Jane Doe"]);
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn resolves_unique_labels() {
        let rows = names(6);
        let lookup = build(&rows);
        for (id, label) in &rows {
            assert_eq!(lookup.resolve(label), Resolution::Id(*id));
        }
    }

    #[test]
    fn duplicate_label_resolves_to_first_row() {
        let rows = vec![
            (4, "Sales".to_string()),
            (8, "Sales".to_string()),
            (9, "Legal".to_string()),
        ];
        assert_eq!(build(&rows).resolve("Sales"), Resolution::Id(4));
    }

    #[test]
    fn absent_label_is_not_found() {
        let lookup = build(&names(3));
        assert_eq!(lookup.resolve("nobody"), Resolution::NotFound);
        assert_eq!(Lookup::default().resolve(""), Resolution::NotFound);
    }

    #[test]
    fn sentinel_resolves_to_null_not_missing() {
        let lookup = build(&names(2)).with_none_sentinel();
        assert_eq!(lookup.labels().last().unwrap(), NO_MANAGER_LABEL);
        assert_eq!(lookup.pairs().last().unwrap(), &(NO_MANAGER_LABEL.to_string(), None));
        assert_eq!(lookup.resolve(NO_MANAGER_LABEL), Resolution::Null);
    }

    #[test]
    fn not_found_is_an_error_but_null_is_not() {
        assert_eq!(Resolution::Null.into_result("manager", "None").unwrap(), None);
        assert_eq!(Resolution::Id(3).into_required("role", "Lead").unwrap(), 3);

        let err = Resolution::NotFound
            .into_result("manager", "Ghost")
            .unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Unresolved { kind: "manager", ref label } if label == "Ghost"
        ));
        assert!(Resolution::Null.into_required("role", "None").is_err());
    }
}
