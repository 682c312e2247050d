//! Workplan domain type and validation
//!
//! A workplan maps each task or competency area of a job to the percentage
//! of time expected to be spent in that area. The percentages must be
//! integers and must total exactly 100 before a chart can be built from
//! them.
//!
//! Axis order on the radar chart follows mapping order, so entries live in
//! an insertion-order-preserving map rather than a hash map.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

use crate::error::WorkplanError;

/// Required total for workplan percentages
pub const WORKPLAN_TOTAL: i64 = 100;

/// Validated, ordered mapping from task area to percentage of time
///
/// Immutable once constructed; every constructor enforces the workplan
/// invariants, so holding a `Workplan` means the invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Workplan {
    entries: IndexMap<String, i64>,
}

impl Workplan {
    /// Build a workplan from raw YAML, validating it first
    ///
    /// Mapping keys become task-area labels: strings are taken as-is, other
    /// scalars stringify, non-scalar keys are rejected.
    pub fn from_value(value: &Value) -> Result<Self, WorkplanError> {
        validate(value)?;

        let mut entries = IndexMap::new();
        if let Value::Mapping(mapping) = value {
            for (key, val) in mapping {
                let label = scalar_label(key).ok_or_else(|| WorkplanError::InvalidParameterType {
                    actual: format!("mapping with {} label", type_name(key)),
                })?;
                if let Some(pct) = as_integer(val) {
                    entries.insert(label, pct);
                }
            }
        }

        debug!(areas = entries.len(), "constructed workplan");
        Ok(Self { entries })
    }

    /// Build a workplan from typed pairs, enforcing the sum invariant
    pub fn from_pairs<I>(pairs: I) -> Result<Self, WorkplanError>
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let entries: IndexMap<String, i64> = pairs.into_iter().collect();

        let sum: i64 = entries.values().sum();
        if sum != WORKPLAN_TOTAL {
            return Err(WorkplanError::ValuesDontSumTo100 { sum });
        }

        Ok(Self { entries })
    }

    /// Construct without invariant checks. Test support for exercising
    /// degenerate inputs downstream of validation.
    #[cfg(test)]
    pub(crate) fn from_entries_unchecked(entries: IndexMap<String, i64>) -> Self {
        Self { entries }
    }

    /// Task-area labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Percentage values in insertion order
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.values().copied()
    }

    /// (label, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(label, pct)| (label.as_str(), *pct))
    }

    /// Largest allocated percentage, `None` for an empty plan
    pub fn max_value(&self) -> Option<i64> {
        self.entries.values().copied().max()
    }

    /// Number of task areas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no task areas
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that a raw value is usable as a workplan
///
/// Checks in order: the value is a mapping, every mapping value is an
/// integer, and the values total exactly 100. Returns `Ok(true)` when all
/// checks pass; every failure is a typed error, never a `false` return, so
/// callers can match on the error kind.
///
/// Negative values are not rejected: any integer plan summing to 100
/// validates regardless of sign.
pub fn validate(workplan: &Value) -> Result<bool, WorkplanError> {
    let Value::Mapping(mapping) = workplan else {
        return Err(WorkplanError::InvalidParameterType {
            actual: type_name(workplan).to_string(),
        });
    };

    let offending: Vec<String> = mapping
        .values()
        .filter(|value| as_integer(value).is_none())
        .map(|value| type_name(value).to_string())
        .collect();
    if !offending.is_empty() {
        return Err(WorkplanError::ValuesNotTypeInt { types: offending });
    }

    let sum: i64 = mapping.values().filter_map(as_integer).sum();
    if sum != WORKPLAN_TOTAL {
        return Err(WorkplanError::ValuesDontSumTo100 { sum });
    }

    Ok(true)
}

/// Integer extraction: floats, numeric strings and booleans all miss
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

fn scalar_label(key: &Value) -> Option<String> {
    match key {
        Value::String(label) => Some(label.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_yaml::Mapping;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn test_validate_accepts_plan_summing_to_100() {
        let plan = yaml("{memo writing: 20, answering phones: 20, drinking coffee: 60}");
        assert!(validate(&plan).unwrap());
    }

    #[test]
    fn test_validate_rejects_non_mapping() {
        let err = validate(&yaml("[repair, inspection]")).unwrap_err();
        match err {
            WorkplanError::InvalidParameterType { ref actual } => assert_eq!(actual, "sequence"),
            other => panic!("expected InvalidParameterType, got {other:?}"),
        }

        let err = validate(&yaml("just a string")).unwrap_err();
        assert!(matches!(err, WorkplanError::InvalidParameterType { .. }));
    }

    #[test]
    fn test_validate_rejects_float_values() {
        let err = validate(&yaml("{repair: 40.5, inspection: 59.5}")).unwrap_err();
        match err {
            WorkplanError::ValuesNotTypeInt { ref types } => {
                assert_eq!(types, &["float", "float"]);
            }
            other => panic!("expected ValuesNotTypeInt, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_numeric_strings() {
        let err = validate(&yaml("{repair: '40', inspection: 60}")).unwrap_err();
        match err {
            WorkplanError::ValuesNotTypeInt { ref types } => assert_eq!(types, &["string"]),
            other => panic!("expected ValuesNotTypeInt, got {other:?}"),
        }
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn test_validate_type_check_precedes_sum_check() {
        // One bad type and a bad sum: the type error wins
        let err = validate(&yaml("{repair: 40.0, inspection: 10}")).unwrap_err();
        assert!(matches!(err, WorkplanError::ValuesNotTypeInt { .. }));
    }

    #[test]
    fn test_validate_rejects_wrong_sum() {
        let err = validate(&yaml("{repair: 40, inspection: 35}")).unwrap_err();
        match err {
            WorkplanError::ValuesDontSumTo100 { sum } => assert_eq!(sum, 75),
            other => panic!("expected ValuesDontSumTo100, got {other:?}"),
        }
        assert!(err.to_string().contains("75"));
    }

    #[test]
    fn test_validate_rejects_empty_mapping() {
        let err = validate(&yaml("{}")).unwrap_err();
        match err {
            WorkplanError::ValuesDontSumTo100 { sum } => assert_eq!(sum, 0),
            other => panic!("expected ValuesDontSumTo100, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_allows_negative_values_summing_to_100() {
        let plan = yaml("{overtime: 105, corrections: -5}");
        assert!(validate(&plan).unwrap());
    }

    #[test]
    fn test_from_value_preserves_insertion_order() {
        let plan = yaml("{repair: 40, inspection: 35, paperwork: 25}");
        let workplan = Workplan::from_value(&plan).unwrap();

        let labels: Vec<&str> = workplan.labels().collect();
        assert_eq!(labels, vec!["repair", "inspection", "paperwork"]);

        let values: Vec<i64> = workplan.values().collect();
        assert_eq!(values, vec![40, 35, 25]);
        assert_eq!(workplan.max_value(), Some(40));
    }

    #[test]
    fn test_from_value_stringifies_scalar_labels() {
        let plan = yaml("{2024: 50, maintenance: 50}");
        let workplan = Workplan::from_value(&plan).unwrap();

        let labels: Vec<&str> = workplan.labels().collect();
        assert_eq!(labels, vec!["2024", "maintenance"]);
    }

    #[test]
    fn test_from_value_rejects_non_scalar_labels() {
        let plan = yaml("{[a, b]: 100}");
        let err = Workplan::from_value(&plan).unwrap_err();
        assert!(matches!(err, WorkplanError::InvalidParameterType { .. }));
    }

    #[test]
    fn test_from_pairs_enforces_sum() {
        let workplan = Workplan::from_pairs([("repair".to_string(), 60), ("paperwork".to_string(), 40)]).unwrap();
        assert_eq!(workplan.len(), 2);

        let err = Workplan::from_pairs([("repair".to_string(), 60)]).unwrap_err();
        assert!(matches!(err, WorkplanError::ValuesDontSumTo100 { sum: 60 }));
    }

    #[test]
    fn test_workplan_serializes_as_ordered_mapping() {
        let workplan = Workplan::from_value(&yaml("{repair: 40, inspection: 35, paperwork: 25}")).unwrap();
        let json = serde_json::to_string(&workplan).unwrap();
        assert_eq!(json, r#"{"repair":40,"inspection":35,"paperwork":25}"#);
    }

    fn plans_summing_to_100() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-50i64..150, 1..8).prop_map(|mut values| {
            let rest: i64 = values.iter().skip(1).sum();
            values[0] = WORKPLAN_TOTAL - rest;
            values
        })
    }

    fn mapping_from(values: &[i64]) -> Value {
        let mapping: Mapping = values
            .iter()
            .enumerate()
            .map(|(i, v)| (Value::String(format!("area {i}")), Value::Number((*v).into())))
            .collect();
        Value::Mapping(mapping)
    }

    proptest! {
        #[test]
        fn prop_validate_accepts_any_integer_plan_summing_to_100(values in plans_summing_to_100()) {
            prop_assert!(validate(&mapping_from(&values)).unwrap());
        }

        #[test]
        fn prop_validate_rejects_any_other_sum(values in proptest::collection::vec(0i64..60, 1..8)) {
            let total: i64 = values.iter().sum();
            prop_assume!(total != WORKPLAN_TOTAL);

            match validate(&mapping_from(&values)) {
                Err(WorkplanError::ValuesDontSumTo100 { sum }) => prop_assert_eq!(sum, total),
                other => prop_assert!(false, "expected ValuesDontSumTo100, got {:?}", other),
            }
        }
    }
}
