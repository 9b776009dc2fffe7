//! # Partial updates
//!
//! A patch document is an ordered list of `replace` operations:
//!
//! ```json
//! [{ "op": "replace", "path": "/city", "value": "Berlin" }]
//! ```
//!
//! Operations are applied in order to a working copy of the record. The first failing
//! operation aborts the whole document, and the caller only persists the copy once every
//! operation succeeded.
//!
//! Paths may carry a leading `/` and are matched case-insensitively. Values are coerced the
//! way loosely-typed JSON clients expect: numeric fields accept numbers or numeric strings
//! (`"888"`), text fields accept strings or numbers.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading or applying a patch document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatchError {
    #[error("Malformed patch document: {0}")]
    Malformed(String),

    #[error("Unknown patch path: {path}")]
    UnknownPath { path: String },

    #[error("Patch path is immutable: {path}")]
    ImmutablePath { path: String },

    #[error("Incompatible value for {path}: expected {expected}")]
    IncompatibleValue { path: String, expected: &'static str },
}

/// A single patch operation. Only `replace` is supported; `op` is read in any of the usual casings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    #[serde(alias = "Replace", alias = "REPLACE")]
    Replace {
        path: String,
        #[serde(default)]
        value: Value,
    },
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        PatchOperation::Replace {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// An ordered list of patch operations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

impl PatchDocument {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    /// Reads a document from raw JSON. Anything that is not a list of known operations
    /// is malformed.
    pub fn from_json(raw: Value) -> Result<Self, PatchError> {
        serde_json::from_value(raw).map_err(|e| PatchError::Malformed(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Applies every operation in order. Stops at the first failure, leaving `target`
    /// partially modified; callers apply to a copy.
    pub fn apply_to<E: Patchable>(&self, target: &mut E) -> Result<(), PatchError> {
        for operation in &self.0 {
            match operation {
                PatchOperation::Replace { path, value } => {
                    let field = normalize_path(path);
                    if field == "id" {
                        return Err(PatchError::ImmutablePath { path: path.clone() });
                    }
                    if !target.replace_field(&field, value)? {
                        return Err(PatchError::UnknownPath { path: path.clone() });
                    }
                }
            }
        }
        Ok(())
    }
}

/// A record whose mutable fields can be replaced by name.
pub trait Patchable {
    /// Replaces the field named `field` (already lowercased, no leading `/`).
    ///
    /// Returns `Ok(false)` when the record has no such field.
    fn replace_field(&mut self, field: &str, value: &Value) -> Result<bool, PatchError>;
}

fn normalize_path(path: &str) -> String {
    path.trim().trim_start_matches('/').to_ascii_lowercase()
}

fn incompatible(field: &str, expected: &'static str) -> PatchError {
    PatchError::IncompatibleValue {
        path: field.to_string(),
        expected,
    }
}

/// Reads a text value. Numbers are taken in their textual form.
pub fn as_text(field: &str, value: &Value) -> Result<String, PatchError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(incompatible(field, "text")),
    }
}

/// Reads a decimal value from a number or a numeric string.
pub fn as_decimal(field: &str, value: &Value) -> Result<Decimal, PatchError> {
    let parsed = match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Some(Decimal::from(i)),
            (None, Some(u)) => Some(Decimal::from(u)),
            _ => n.as_f64().and_then(Decimal::from_f64),
        },
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed.ok_or_else(|| incompatible(field, "decimal"))
}

/// Reads an integer value from a number or a numeric string.
pub fn as_integer(field: &str, value: &Value) -> Result<i64, PatchError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| incompatible(field, "integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Crate {
        label: String,
        weight: i64,
    }

    impl Patchable for Crate {
        fn replace_field(&mut self, field: &str, value: &Value) -> Result<bool, PatchError> {
            match field {
                "label" => self.label = as_text(field, value)?,
                "weight" => self.weight = as_integer(field, value)?,
                _ => return Ok(false),
            }
            Ok(true)
        }
    }

    #[test]
    fn test_reads_document_from_json() {
        let doc = PatchDocument::from_json(json!([
            { "op": "replace", "path": "/label", "value": "north" }
        ]))
        .unwrap();
        assert_eq!(doc, PatchDocument::new(vec![PatchOperation::replace("/label", "north")]));
    }

    #[test]
    fn test_reads_capitalized_op() {
        let doc = PatchDocument::from_json(json!([
            { "op": "Replace", "path": "/label", "value": "north" },
            { "op": "REPLACE", "path": "/label", "value": "south" }
        ]))
        .unwrap();
        assert_eq!(
            doc,
            PatchDocument::new(vec![
                PatchOperation::replace("/label", "north"),
                PatchOperation::replace("/label", "south"),
            ])
        );
    }

    #[test]
    fn test_rejects_unsupported_operations() {
        let err = PatchDocument::from_json(json!([
            { "op": "remove", "path": "/label" }
        ]))
        .unwrap_err();
        assert!(matches!(err, PatchError::Malformed(_)));

        let err = PatchDocument::from_json(json!({ "op": "replace" })).unwrap_err();
        assert!(matches!(err, PatchError::Malformed(_)));
    }

    #[test]
    fn test_applies_in_order_with_loose_paths() {
        let mut target = Crate::default();
        let doc = PatchDocument::new(vec![
            PatchOperation::replace("/LABEL", "first"),
            PatchOperation::replace("weight", "888"),
            PatchOperation::replace("/label", 12),
        ]);
        doc.apply_to(&mut target).unwrap();
        assert_eq!(target.label, "12");
        assert_eq!(target.weight, 888);
    }

    #[test]
    fn test_unknown_and_immutable_paths() {
        let mut target = Crate::default();
        assert_eq!(
            PatchDocument::new(vec![PatchOperation::replace("/colour", "red")]).apply_to(&mut target),
            Err(PatchError::UnknownPath { path: "/colour".into() })
        );
        assert_eq!(
            PatchDocument::new(vec![PatchOperation::replace("/Id", 5)]).apply_to(&mut target),
            Err(PatchError::ImmutablePath { path: "/Id".into() })
        );
    }

    #[test]
    fn test_incompatible_values() {
        let mut target = Crate::default();
        let err = PatchDocument::new(vec![PatchOperation::replace("weight", "heavy")])
            .apply_to(&mut target)
            .unwrap_err();
        assert!(matches!(err, PatchError::IncompatibleValue { expected: "integer", .. }));

        let err = PatchDocument::new(vec![PatchOperation::replace("label", json!(null))])
            .apply_to(&mut target)
            .unwrap_err();
        assert!(matches!(err, PatchError::IncompatibleValue { expected: "text", .. }));
    }

    #[test]
    fn test_decimal_coercion() {
        assert_eq!(as_decimal("price", &json!(12)).unwrap(), Decimal::from(12));
        assert_eq!(as_decimal("price", &json!("19.99")).unwrap(), Decimal::new(1999, 2));
        assert!(as_decimal("price", &json!(true)).is_err());
    }
}
