//! Small predicates shared by schema kinds, and the [`invariant`] primitive
//! every check raises errors through.

use crate::error::{ValidationError, ValidationResult};
use crate::path::Path;
use crate::value::Value;

/// Fail with a path-qualified error unless `condition` holds.
///
/// ```
/// use optimal_core::{invariant, Path};
///
/// let path = Path::root().key("port");
/// assert!(invariant(true, &path, "unused").is_ok());
/// let err = invariant(false, &path, "Must be a number.").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid field \"port\". Must be a number.");
/// ```
pub fn invariant(condition: bool, path: &Path, message: impl Into<String>) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(path, message))
    }
}

/// Finite, non-NaN number.
pub fn is_valid_number(n: f64) -> bool {
    n.is_finite()
}

/// Plain record (not an instance, array or null).
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Plain record or class instance.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Instance(_))
}

/// A value is "present" for cross-field checks when it is defined and not null.
pub fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// Type name for messages. Instances report their class name.
pub fn type_of(value: &Value) -> String {
    match value {
        Value::Instance(instance) => instance.class().name().to_string(),
        other => other.category().as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Class, Instance, Map};

    #[test]
    fn valid_numbers_exclude_nan_and_infinity() {
        assert!(is_valid_number(0.0));
        assert!(is_valid_number(-12.5));
        assert!(!is_valid_number(f64::NAN));
        assert!(!is_valid_number(f64::INFINITY));
    }

    #[test]
    fn instances_are_objects_but_not_plain() {
        let value = Value::from(Instance::new(&Class::new("Foo"), Map::new()));
        assert!(is_object(&value));
        assert!(!is_plain_object(&value));
        assert!(is_plain_object(&Value::Object(Map::new())));
        assert!(!is_object(&Value::Array(vec![])));
    }

    #[test]
    fn null_is_not_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&Value::Null)));
        assert!(is_present(Some(&Value::Bool(false))));
    }

    #[test]
    fn type_of_reports_class_names() {
        let value = Value::from(Instance::new(&Class::new("Foo"), Map::new()));
        assert_eq!(type_of(&value), "Foo");
        assert_eq!(type_of(&Value::from("x")), "string");
    }
}
