//! The typed counting engine.
//!
//! Given a list of raw text tokens and a declared target kind, the engine
//! parses every token as that kind, then groups equal values and produces a
//! frequency table mapping each value's canonical label to its number of
//! occurrences. Labels appear in first-seen order, so the output is
//! deterministic for a given input order.
//!
//! Parsing is all-or-nothing: the first token that fails its kind-specific
//! parse aborts the whole call with a [`CountError::ParseFailure`], and no
//! partial table is returned. Both front ends rely on that contract to reject
//! an entire batch on any one malformed element.
//!
//! The `Character` kind is the one deliberate outlier. Instead of counting
//! each token as one unit, the engine concatenates every item into a single
//! blob and counts the individual characters of the result, so
//! `["ab", "ba"]` yields `{a: 2, b: 2}` rather than `{ab: 1, ba: 1}`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::errors::{CountError, CountResult};
use crate::parsing::{BoolValue, DateValue, DecimalValue};

/// The canonical names of the six kinds the engine can parse and count.
pub const SUPPORTED_KINDS: [&str; 6] = [
    "text",
    "integer",
    "decimal",
    "character",
    "boolean",
    "date",
];

/// The closed set of element types the engine can parse and count.
///
/// Each variant has an associated parse rule and canonical label format; see
/// [`count`] for the full table. The set is fixed -- callers select a kind,
/// they cannot extend it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SupportedKind {
    /// Tokens are taken as-is; the token is its own label.
    Text,
    /// Base-10 signed integers.
    Integer,
    /// Locale-invariant decimal numbers, scientific notation included.
    Decimal,
    /// Individual characters of the concatenated input.
    Character,
    /// `true`/`yes`/`1` and `false`/`no`/`0`, case-insensitively.
    Boolean,
    /// Calendar dates in `MM/DD/YYYY` or `YYYY-MM-DD` form, with an optional
    /// time of day that is discarded before grouping.
    Date,
}

impl SupportedKind {
    /// The canonical name of the kind, as listed in [`SUPPORTED_KINDS`].
    pub fn name(self) -> &'static str {
        match self {
            SupportedKind::Text => "text",
            SupportedKind::Integer => "integer",
            SupportedKind::Decimal => "decimal",
            SupportedKind::Character => "character",
            SupportedKind::Boolean => "boolean",
            SupportedKind::Date => "date",
        }
    }

    /// Resolves a kind from its name, case-insensitively and ignoring
    /// surrounding whitespace. A handful of conventional aliases are
    /// accepted alongside the canonical names (`string`, `int`, `double`,
    /// `float`, `char`, `bool`, `datetime`).
    pub fn from_name(name: &str) -> CountResult<SupportedKind> {
        match name.trim().to_lowercase().as_str() {
            "text" | "string" => Ok(SupportedKind::Text),
            "integer" | "int" => Ok(SupportedKind::Integer),
            "decimal" | "double" | "float" => Ok(SupportedKind::Decimal),
            "character" | "char" => Ok(SupportedKind::Character),
            "boolean" | "bool" => Ok(SupportedKind::Boolean),
            "date" | "datetime" => Ok(SupportedKind::Date),
            _ => Err(CountError::UnsupportedKind(name.to_string())),
        }
    }
}

impl fmt::Display for SupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The engine's sole output: canonical label -> occurrence count, in
/// first-seen order of distinct labels.
pub type FrequencyTable = IndexMap<String, usize>;

/// Counts occurrences of `items`, parsing each one as `kind`.
///
/// Returns [`CountError::EmptyInput`] when there is nothing to count,
/// and [`CountError::ParseFailure`] for the first token that does not parse
/// as the declared kind. On success, the counts in the table sum to the
/// number of parsed items and every label carries a count of at least one.
///
/// The call is purely functional: no state survives between invocations, so
/// repeated calls with identical input produce identical tables.
pub fn count(items: &[String], kind: SupportedKind) -> CountResult<FrequencyTable> {
    if items.is_empty() {
        return Err(CountError::EmptyInput);
    }
    let labels = match kind {
        SupportedKind::Text => items.to_vec(),
        SupportedKind::Integer => parse_labels::<i64>(items, kind)?,
        SupportedKind::Decimal => parse_labels::<DecimalValue>(items, kind)?,
        SupportedKind::Boolean => parse_labels::<BoolValue>(items, kind)?,
        SupportedKind::Date => parse_labels::<DateValue>(items, kind)?,
        SupportedKind::Character => {
            let blob = items.concat();
            if blob.is_empty() {
                return Err(CountError::EmptyInput);
            }
            blob.chars().map(|c| c.to_string()).collect()
        }
    };
    Ok(tally(labels))
}

/// Resolves `kind_name` through [`SupportedKind::from_name`] and counts.
///
/// This is the entry point for callers that carry the kind as text, like the
/// HTTP front end; an unrecognized name yields
/// [`CountError::UnsupportedKind`].
pub fn count_by_name(items: &[String], kind_name: &str) -> CountResult<FrequencyTable> {
    let kind = SupportedKind::from_name(kind_name)?;
    count(items, kind)
}

/// Parses every item as `T`, left to right, rendering each parsed value's
/// canonical label. Stops at the first token that fails.
fn parse_labels<T>(items: &[String], kind: SupportedKind) -> CountResult<Vec<String>>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    items
        .iter()
        .map(|raw| {
            raw.parse::<T>()
                .map(|parsed| parsed.to_string())
                .map_err(|err| CountError::ParseFailure {
                    value: raw.clone(),
                    kind,
                    reason: err.to_string(),
                })
        })
        .collect()
}

/// Builds the frequency table by scanning labels in order, inserting a fresh
/// entry the first time a label is seen.
fn tally<I>(labels: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    let mut table = FrequencyTable::new();
    for label in labels {
        *table.entry(label).or_insert(0) += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counting_text_groups_equal_tokens() {
        let table = count(&items(&["apple", "banana", "apple"]), SupportedKind::Text).unwrap();
        assert_eq!(table.get("apple"), Some(&2));
        assert_eq!(table.get("banana"), Some(&1));
        assert_eq!(table.values().sum::<usize>(), 3);
    }

    #[test]
    fn labels_appear_in_first_seen_order() {
        let table = count(&items(&["b", "a", "b", "c"]), SupportedKind::Text).unwrap();
        let keys: Vec<&String> = table.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input_is_not_a_table_and_not_a_parse_failure() {
        assert_eq!(count(&[], SupportedKind::Text), Err(CountError::EmptyInput));
        assert_eq!(
            count(&[], SupportedKind::Integer),
            Err(CountError::EmptyInput)
        );
    }

    #[test]
    fn one_bad_token_aborts_the_whole_call() {
        let result = count(&items(&["1", "two", "3"]), SupportedKind::Integer);
        match result {
            Err(CountError::ParseFailure { value, kind, .. }) => {
                assert_eq!(value, "two".to_string());
                assert_eq!(kind, SupportedKind::Integer);
            }
            other => panic!("expected a parse failure, got {:?}", other),
        }
    }

    #[test]
    fn valid_tokens_after_the_bad_one_do_not_rescue_the_call() {
        let result = count(&items(&["bad", "1", "1"]), SupportedKind::Integer);
        assert!(matches!(result, Err(CountError::ParseFailure { .. })));
    }

    #[test]
    fn integers_group_by_numeric_value() {
        let table = count(&items(&["3", "+3", "-3"]), SupportedKind::Integer).unwrap();
        assert_eq!(table.get("3"), Some(&2));
        assert_eq!(table.get("-3"), Some(&1));
    }

    #[test]
    fn decimals_with_equal_values_share_one_label() {
        let table = count(&items(&["1.5", "1.50", "2"]), SupportedKind::Decimal).unwrap();
        assert_eq!(table.get("1.5"), Some(&2));
        assert_eq!(table.get("2"), Some(&1));
    }

    #[test]
    fn characters_count_across_the_joined_input() {
        let table = count(&items(&["ab", "ba"]), SupportedKind::Character).unwrap();
        assert_eq!(table.get("a"), Some(&2));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.len(), 2);
        assert!(table.get("ab").is_none());
    }

    #[test]
    fn characters_with_nothing_to_join_report_empty_input() {
        let result = count(&items(&["", ""]), SupportedKind::Character);
        assert_eq!(result, Err(CountError::EmptyInput));
    }

    #[test]
    fn boolean_aliases_collapse_to_two_labels() {
        let table = count(
            &items(&["true", "yes", "1", "false", "no", "0"]),
            SupportedKind::Boolean,
        )
        .unwrap();
        assert_eq!(table.get("True"), Some(&3));
        assert_eq!(table.get("False"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn both_date_forms_collapse_to_one_key() {
        let table = count(
            &items(&["01/15/2024", "2024-01-15"]),
            SupportedKind::Date,
        )
        .unwrap();
        assert_eq!(table.get("2024-01-15"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unknown_kind_name_is_rejected_with_the_supported_list() {
        let result = count_by_name(&items(&["x"]), "unknown");
        match result {
            Err(err @ CountError::UnsupportedKind(_)) => {
                let msg = err.to_string();
                for kind in &SUPPORTED_KINDS {
                    assert!(msg.contains(kind));
                }
            }
            other => panic!("expected an unsupported kind error, got {:?}", other),
        }
    }

    #[test]
    fn kind_names_resolve_case_insensitively_with_aliases() {
        assert_eq!(
            SupportedKind::from_name("STRING").unwrap(),
            SupportedKind::Text
        );
        assert_eq!(
            SupportedKind::from_name(" Double ").unwrap(),
            SupportedKind::Decimal
        );
        assert_eq!(
            SupportedKind::from_name("datetime").unwrap(),
            SupportedKind::Date
        );
        for kind in &SUPPORTED_KINDS {
            assert_eq!(SupportedKind::from_name(kind).unwrap().name(), *kind);
        }
    }

    #[test]
    fn repeated_calls_produce_identical_tables() {
        let list = items(&["a", "b", "a", "c", "b", "a"]);
        let first = count(&list, SupportedKind::Text).unwrap();
        let second = count(&list, SupportedKind::Text).unwrap();
        assert_eq!(first, second);
        let first_keys: Vec<&String> = first.keys().collect();
        let second_keys: Vec<&String> = second.keys().collect();
        assert_eq!(first_keys, second_keys);
    }

    proptest! {
        #[test]
        fn counts_sum_to_input_length(values in prop::collection::vec(-20..=20i64, 1..60)) {
            let list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            let table = count(&list, SupportedKind::Integer).unwrap();
            prop_assert_eq!(table.values().sum::<usize>(), list.len());
            for (label, n) in &table {
                let occurrences = list.iter().filter(|item| item.as_str() == label.as_str()).count();
                prop_assert_eq!(*n, occurrences);
            }
        }
    }
}
