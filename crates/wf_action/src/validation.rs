//! User-facing messages for fields that could not be bound.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use wf_bind::bind::{BindingErrors, BindingFailure};

// -----------------------------------------------------------------------------
// ValidationError

/// One message about one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    /// The submitted values, for redisplay.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            values: Vec::new(),
        }
    }
}

impl From<&BindingFailure> for ValidationError {
    fn from(failure: &BindingFailure) -> Self {
        Self {
            field: String::from(failure.path()),
            message: failure.cause().to_string(),
            values: failure.values().to_vec(),
        }
    }
}

// -----------------------------------------------------------------------------
// ValidationErrors

/// Messages grouped by field name, fields in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationErrors {
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.fields
            .entry(error.field.clone())
            .or_default()
            .push(error);
    }

    #[inline]
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationError::new(field, message));
    }

    /// Records every failure that is meant for the user.
    ///
    /// Informational failures, such as parameters naming no property, are
    /// left out.
    pub fn add_failures(&mut self, failures: &BindingErrors) {
        for failure in failures.reportable() {
            self.push(ValidationError::from(failure));
        }
    }

    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Fields with at least one message.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Every message, grouped by field.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.fields.values().flatten()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        iter.into_iter().for_each(|error| self.push(error));
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use wf_bind::bind::{BindStage, BindingErrors, BindingFailure};
    use wf_bind::error::{AccessError, CoercionError};

    use super::{ValidationError, ValidationErrors};

    #[test]
    fn groups_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("age", "too young");
        errors.add("name", "required");
        errors.add("age", "not a number");

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["age", "name"]);
        assert_eq!(errors.get("age").map(<[_]>::len), Some(2));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn only_reportable_failures_are_kept() {
        let mut failures = BindingErrors::new();
        failures.push(BindingFailure::new(
            "nickname",
            vec![String::from("x")],
            BindStage::Resolve,
            AccessError::UnknownProperty {
                name: String::from("nickname"),
                type_path: "Form",
            },
        ));
        failures.push(BindingFailure::new(
            "age",
            vec![String::from("ten")],
            BindStage::Coerce,
            CoercionError::bad_format::<u32>("ten"),
        ));

        let mut errors = ValidationErrors::new();
        errors.add_failures(&failures);

        assert_eq!(errors.len(), 1);
        let age = &errors.get("age").unwrap()[0];
        assert_eq!(age.values, ["ten"]);
        assert!(age.message.contains("ten"));
    }

    #[test]
    fn serializes_as_a_field_map() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new("age", "required"));

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"age":[{"field":"age","message":"required"}]}"#);

        let back: ValidationErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
