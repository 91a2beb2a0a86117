//! Criteria shared by every schema kind.
//!
//! Each function takes the schema [`State`] and either configures it
//! (returning `None`) or returns a [`Validator`] to register.

use std::collections::BTreeSet;
use std::sync::Arc;

use optimal_core::{is_present, Path, ValidationError, Value};

use crate::scope::Scope;
use crate::state::{DefaultValue, State};
use crate::validator::Validator;

/// Error type custom callbacks may fail with.
pub type CustomError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by custom callbacks.
pub type CustomResult = Result<(), CustomError>;

/// Toggle null acceptance.
pub fn nullable(state: &mut State, nullable: bool) -> Option<Validator> {
    state.nullable = nullable;
    None
}

/// Toggle requiredness.
pub fn required(state: &mut State, required: bool) -> Option<Validator> {
    state.required = required;
    None
}

/// Forbid any defined value. Undefined input resolves to undefined.
pub fn never(state: &mut State) -> Option<Validator> {
    state.default = DefaultValue::Undefined;
    state.never = true;
    None
}

/// Log `message` whenever a defined value is validated.
pub fn deprecate(state: &mut State, message: impl Into<String>) -> Option<Validator> {
    state.metadata.deprecated = Some(message.into());
    None
}

/// Replace the default with a value computed per validation call.
pub fn default_with<F>(state: &mut State, factory: F) -> Option<Validator>
where
    F: Fn(&Path, Scope<'_>) -> Value + Send + Sync + 'static,
{
    state.default = DefaultValue::Factory(Arc::new(factory));
    None
}

/// Run `callback` against the value; its error becomes a validation error
/// at the field's path.
pub fn custom<F>(_state: &mut State, callback: F) -> Option<Validator>
where
    F: Fn(&Value, Scope<'_>) -> CustomResult + Send + Sync + 'static,
{
    Some(Validator::check(move |value, path, scope| {
        callback(value, scope).map_err(|err| ValidationError::new(path, err.to_string()))
    }))
}

/// Only accept the schema's default value.
///
/// # Panics
///
/// When the schema has no fixed default, or the default does not pass the
/// kind's type check.
#[track_caller]
pub fn only(state: &mut State) -> Option<Validator> {
    let default = match state.default.as_static() {
        Some(default) if !default.is_null() && state.kind.check(default) => default.clone(),
        _ => panic!(
            "only() requires a defined {} default value",
            state.kind.name()
        ),
    };
    Some(Validator::check(move |value, path, _| {
        if *value == default {
            Ok(())
        } else {
            Err(ValidationError::new(
                path,
                format!("Value may only be \"{default}\"."),
            ))
        }
    }))
}

#[derive(Debug, Clone, Copy)]
enum Presence {
    All,
    Any,
    One,
}

/// If any of the keys (plus the field itself) is present in the current
/// object, all of them must be.
#[track_caller]
pub fn and(_state: &mut State, keys: &[&str]) -> Option<Validator> {
    Some(presence(keys, Presence::All, "and"))
}

/// At least one of the keys (plus the field itself) must be present in the
/// current object.
#[track_caller]
pub fn or(_state: &mut State, keys: &[&str]) -> Option<Validator> {
    Some(presence(keys, Presence::Any, "or"))
}

/// Exactly one of the keys (plus the field itself) must be present in the
/// current object.
#[track_caller]
pub fn xor(_state: &mut State, keys: &[&str]) -> Option<Validator> {
    Some(presence(keys, Presence::One, "xor"))
}

#[track_caller]
fn presence(keys: &[&str], rule: Presence, criterion: &str) -> Validator {
    assert!(
        !keys.is_empty(),
        "{criterion}() requires a list of field names"
    );
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();

    Validator::check(move |_, path, scope| {
        let mut checked: BTreeSet<&str> = keys.iter().map(String::as_str).collect();
        if let Some(own) = path.last_key() {
            checked.insert(own);
        }
        let siblings = scope.current.and_then(Value::fields);
        let defined = checked
            .iter()
            .filter(|key| is_present(siblings.and_then(|fields| fields.get(**key))))
            .count();
        let list = checked.iter().copied().collect::<Vec<_>>().join(", ");

        let (ok, message) = match rule {
            Presence::All => (
                defined == 0 || defined == checked.len(),
                format!("All of these fields must be defined: {list}."),
            ),
            Presence::Any => (
                defined > 0,
                format!("At least one of these fields must be defined: {list}."),
            ),
            Presence::One => (
                defined == 1,
                format!("Only one of these fields may be defined: {list}."),
            ),
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(path, message))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use serde_json::json;

    fn run(validator: &Validator, state: &State, value: &Value, path: &Path, scope: Scope<'_>) -> Result<(), String> {
        validator
            .run(value, path, scope, state)
            .map(|_| ())
            .map_err(|e| e.reason().to_string())
    }

    #[test]
    fn never_clears_default() {
        let mut state = State::new(Kind::String);
        never(&mut state);
        assert!(state.never);
        assert!(matches!(state.default, DefaultValue::Undefined));
    }

    #[test]
    fn only_compares_against_default() {
        let mut state = State::new(Kind::String);
        state.default = DefaultValue::Static(Value::from("on"));
        let validator = only(&mut state).unwrap();
        let path = Path::root();
        assert!(run(&validator, &state, &Value::from("on"), &path, Scope::strict()).is_ok());
        assert_eq!(
            run(&validator, &state, &Value::from("off"), &path, Scope::strict()),
            Err("Value may only be \"on\".".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "only() requires a defined string default value")]
    fn only_without_default_panics() {
        let mut state = State::new(Kind::String);
        state.default = DefaultValue::Undefined;
        only(&mut state);
    }

    #[test]
    #[should_panic(expected = "or() requires a list of field names")]
    fn empty_key_list_panics() {
        let mut state = State::new(Kind::String);
        or(&mut state, &[]);
    }

    #[test]
    fn custom_errors_are_path_qualified() {
        let mut state = State::new(Kind::Number);
        let validator = custom(&mut state, |value, _| {
            if value.as_f64() == Some(13.0) {
                Err("Unlucky number.".into())
            } else {
                Ok(())
            }
        })
        .unwrap();
        let path = Path::root().key("n");
        let err = validator
            .run(&Value::Number(13.0), &path, Scope::strict(), &state)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid field \"n\". Unlucky number.");
    }

    #[test]
    fn and_requires_all_once_any_is_set() {
        let mut state = State::new(Kind::String);
        let validator = and(&mut state, &["b"]).unwrap();
        let path = Path::root().key("a");

        let none = Value::from(json!({}));
        assert!(run(&validator, &state, &Value::from(""), &path, Scope::strict().with_current(&none)).is_ok());

        let both = Value::from(json!({"a": "x", "b": "y"}));
        assert!(run(&validator, &state, &Value::from("x"), &path, Scope::strict().with_current(&both)).is_ok());

        let partial = Value::from(json!({"a": "x"}));
        assert_eq!(
            run(&validator, &state, &Value::from("x"), &path, Scope::strict().with_current(&partial)),
            Err("All of these fields must be defined: a, b.".to_string())
        );
    }

    #[test]
    fn or_requires_one_present() {
        let mut state = State::new(Kind::String);
        let validator = or(&mut state, &["b", "c"]).unwrap();
        let path = Path::root().key("a");

        let none = Value::from(json!({"a": null}));
        assert_eq!(
            run(&validator, &state, &Value::from(""), &path, Scope::strict().with_current(&none)),
            Err("At least one of these fields must be defined: a, b, c.".to_string())
        );

        let one = Value::from(json!({"c": 1}));
        assert!(run(&validator, &state, &Value::from(""), &path, Scope::strict().with_current(&one)).is_ok());
    }

    #[test]
    fn xor_requires_exactly_one() {
        let mut state = State::new(Kind::String);
        let validator = xor(&mut state, &["b"]).unwrap();
        let path = Path::root().key("a");

        let both = Value::from(json!({"a": "x", "b": "y"}));
        assert_eq!(
            run(&validator, &state, &Value::from("x"), &path, Scope::strict().with_current(&both)),
            Err("Only one of these fields may be defined: a, b.".to_string())
        );

        let one = Value::from(json!({"b": "y"}));
        assert!(run(&validator, &state, &Value::from(""), &path, Scope::strict().with_current(&one)).is_ok());
    }
}
