//! Declarative validation for write payloads.
//!
//! A [`Schema`] lists the required string fields of a payload type. Fields
//! are read as raw JSON values, so a value of the wrong type is reported
//! against its field like any other violation. Checking a payload never stops at the first problem: every violation is collected,
//! in schema order, so a client can fix a request in one round trip.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A single rule broken by a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Missing `{field}` in request body")]
    Missing { field: &'static str },

    #[error("`{field}` must not be empty")]
    Blank { field: &'static str },

    #[error("`{field}` must be a string")]
    NotString { field: &'static str },

    #[error("Request path id ({path_id}) and request body id ({body_id}) must match")]
    IdMismatch { path_id: String, body_id: String },
}

/// Every violation found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Human-readable message per violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// `Ok(())` when nothing was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A required, non-blank string field of `T`.
pub struct RequiredField<T: 'static> {
    pub name: &'static str,
    pub get: fn(&T) -> Option<&Value>,
}

/// The set of required fields for a payload type.
pub struct Schema<T: 'static> {
    fields: &'static [RequiredField<T>],
}

impl<T: 'static> Schema<T> {
    pub const fn new(fields: &'static [RequiredField<T>]) -> Self {
        Self { fields }
    }

    /// Wire names of the required fields, in check order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Collect every missing, mistyped or blank field of `input`.
    pub fn check(&self, input: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in self.fields {
            match (field.get)(input) {
                None => errors.push(Violation::Missing { field: field.name }),
                Some(Value::String(value)) if value.trim().is_empty() => {
                    errors.push(Violation::Blank { field: field.name })
                }
                Some(Value::String(_)) => {}
                Some(_) => errors.push(Violation::NotString { field: field.name }),
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    struct Pair {
        left: Option<Value>,
        right: Option<Value>,
    }

    fn left(pair: &Pair) -> Option<&Value> {
        pair.left.as_ref()
    }

    fn right(pair: &Pair) -> Option<&Value> {
        pair.right.as_ref()
    }

    const PAIR_FIELDS: &[RequiredField<Pair>] = &[
        RequiredField { name: "left", get: left },
        RequiredField { name: "right", get: right },
    ];

    const PAIR_SCHEMA: Schema<Pair> = Schema::new(PAIR_FIELDS);

    #[test]
    fn test_complete_input_passes() {
        let pair = Pair {
            left: Some(json!("a")),
            right: Some(json!("b")),
        };
        assert!(PAIR_SCHEMA.check(&pair).into_result().is_ok());
    }

    #[test]
    fn test_collects_every_violation_in_order() {
        let pair = Pair {
            left: None,
            right: Some(json!("   ")),
        };
        let errors = PAIR_SCHEMA.check(&pair);
        assert_eq!(
            errors.violations(),
            &[
                Violation::Missing { field: "left" },
                Violation::Blank { field: "right" },
            ]
        );
        assert_eq!(
            errors.to_string(),
            "Missing `left` in request body; `right` must not be empty"
        );
    }

    #[test]
    fn test_non_string_values_are_reported_per_field() {
        let pair = Pair {
            left: Some(json!(5)),
            right: Some(Value::Null),
        };
        let errors = PAIR_SCHEMA.check(&pair);
        assert_eq!(
            errors.violations(),
            &[
                Violation::NotString { field: "left" },
                Violation::NotString { field: "right" },
            ]
        );
        assert_eq!(errors.messages()[0], "`left` must be a string");
    }

    #[test]
    fn test_id_mismatch_names_both_ids() {
        let violation = Violation::IdMismatch {
            path_id: "abc".into(),
            body_id: "xyz".into(),
        };
        assert_eq!(
            violation.to_string(),
            "Request path id (abc) and request body id (xyz) must match"
        );
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = PAIR_SCHEMA.field_names().collect();
        assert_eq!(names, vec!["left", "right"]);
    }
}
