//! # Schema Factory & Validation Algorithm
//!
//! [`SchemaCore`] is the engine every schema kind is built on: a [`State`]
//! plus the ordered list of [`Validator`] steps registered by criteria.
//! [`SchemaCore::validate_at`] is the single recursive algorithm shared by
//! all kinds:
//!
//! 1. undefined input: default it, or fail if required
//! 2. defined input: log deprecation, fail if the field is `never`
//! 3. null: return it if nullable, else fail
//! 4. kind type check
//! 5. registered steps in order, each may replace the value
//! 6. kind cast
//!
//! In lenient mode steps 1-4 never fail and `Check` steps are skipped;
//! defaults, transforms and the cast still apply.

use std::borrow::Cow;

use optimal_core::{invariant, Path, ValidationError, ValidationResult, Value};

use crate::kind::Kind;
use crate::scope::Scope;
use crate::state::State;
use crate::validator::{Role, Validator};

/// State plus registered validation steps.
#[derive(Debug, Clone)]
pub struct SchemaCore {
    state: State,
    validators: Vec<Validator>,
}

impl SchemaCore {
    /// Fresh core for `kind`.
    pub fn new(kind: Kind) -> Self {
        Self {
            state: State::new(kind),
            validators: Vec::new(),
        }
    }

    /// Read-only state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mutable state, for criteria.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Registered steps, in order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Run a criterion against the state, registering the validator it
    /// returns, if any.
    pub fn apply<F>(&mut self, criterion: F)
    where
        F: FnOnce(&mut State) -> Option<Validator>,
    {
        if let Some(validator) = criterion(&mut self.state) {
            self.validators.push(validator);
        }
    }

    /// Validate `value` located at `path`.
    ///
    /// Returns `Ok(None)` only when the input is undefined and the schema
    /// has no default (e.g. after `never()`).
    pub fn validate_at(
        &self,
        value: Option<&Value>,
        path: &Path,
        scope: Scope<'_>,
    ) -> ValidationResult<Option<Value>> {
        let state = &self.state;
        let strict = scope.is_strict();

        let mut current: Cow<'_, Value> = match value {
            None => {
                if state.required && strict {
                    return Err(ValidationError::new(
                        path,
                        "Field is required and must be defined.",
                    ));
                }
                match state.default.resolve(path, scope) {
                    Some(default) => Cow::Owned(default),
                    None => return Ok(None),
                }
            }
            Some(value) => {
                if let Some(message) = &state.metadata.deprecated {
                    tracing::info!(path = %path, "Field \"{path}\" is deprecated. {message}");
                }
                if state.never && strict {
                    return Err(ValidationError::new(path, "Field should never be used."));
                }
                Cow::Borrowed(value)
            }
        };

        if current.is_null() {
            if state.nullable || !strict {
                return Ok(Some(Value::Null));
            }
            return Err(ValidationError::new(path, "Null is not allowed."));
        }

        if strict {
            invariant(state.kind.check(&current), path, state.kind.type_error())?;
        }

        for validator in &self.validators {
            if !strict && validator.role() == Role::Check {
                continue;
            }
            if validator.skips(&current, state) {
                continue;
            }
            if let Some(next) = validator.run(&current, path, scope, state)? {
                current = Cow::Owned(next);
            }
        }

        Ok(Some(state.kind.cast(current.into_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DefaultValue;

    fn string_core() -> SchemaCore {
        SchemaCore::new(Kind::String)
    }

    #[test]
    fn undefined_resolves_to_default() {
        let core = string_core();
        let result = core.validate_at(None, &Path::root(), Scope::strict()).unwrap();
        assert_eq!(result, Some(Value::from("")));
    }

    #[test]
    fn required_rejects_undefined() {
        let mut core = string_core();
        core.state_mut().required = true;
        let err = core.validate_at(None, &Path::root(), Scope::strict()).unwrap_err();
        assert_eq!(err.reason(), "Field is required and must be defined.");
    }

    #[test]
    fn lenient_required_falls_back_to_default() {
        let mut core = string_core();
        core.state_mut().required = true;
        let result = core.validate_at(None, &Path::root(), Scope::lenient()).unwrap();
        assert_eq!(result, Some(Value::from("")));
    }

    #[test]
    fn undefined_default_stays_undefined() {
        let mut core = string_core();
        core.state_mut().default = DefaultValue::Undefined;
        assert_eq!(core.validate_at(None, &Path::root(), Scope::strict()), Ok(None));
    }

    #[test]
    fn null_requires_nullable() {
        let mut core = string_core();
        let err = core
            .validate_at(Some(&Value::Null), &Path::root(), Scope::strict())
            .unwrap_err();
        assert_eq!(err.reason(), "Null is not allowed.");

        core.state_mut().nullable = true;
        let result = core.validate_at(Some(&Value::Null), &Path::root(), Scope::strict());
        assert_eq!(result, Ok(Some(Value::Null)));
    }

    #[test]
    fn null_short_circuits_validators() {
        let mut core = string_core();
        core.state_mut().nullable = true;
        core.apply(|_| {
            Some(Validator::check(|_, path, _| {
                Err(ValidationError::new(path, "should not run"))
            }))
        });
        let result = core.validate_at(Some(&Value::Null), &Path::root(), Scope::strict());
        assert_eq!(result, Ok(Some(Value::Null)));
    }

    #[test]
    fn type_check_message_is_kind_specific() {
        let core = string_core();
        let err = core
            .validate_at(Some(&Value::Number(1.0)), &Path::root().key("name"), Scope::strict())
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid field \"name\". Must be a string.");
    }

    #[test]
    fn transforms_replace_the_value_in_order() {
        let mut core = string_core();
        core.apply(|_| {
            Some(Validator::transform(|value, _, _, _| {
                Ok(Some(Value::from(format!("{value}!"))))
            }))
        });
        core.apply(|_| {
            Some(Validator::transform(|value, _, _, _| {
                Ok(Some(Value::from(format!("{value}?"))))
            }))
        });
        let result = core
            .validate_at(Some(&Value::from("hi")), &Path::root(), Scope::strict())
            .unwrap();
        assert_eq!(result, Some(Value::from("hi!?")));
    }

    #[test]
    fn lenient_mode_skips_checks_and_casts() {
        let mut core = SchemaCore::new(Kind::Number);
        core.apply(|_| {
            Some(Validator::check(|_, path, _| {
                Err(ValidationError::new(path, "always fails"))
            }))
        });
        let result = core
            .validate_at(Some(&Value::from("42")), &Path::root(), Scope::lenient())
            .unwrap();
        assert_eq!(result, Some(Value::Number(42.0)));
    }

    #[test]
    fn never_rejects_defined_values_only() {
        let mut core = string_core();
        core.state_mut().never = true;
        core.state_mut().default = DefaultValue::Undefined;
        let err = core
            .validate_at(Some(&Value::from("x")), &Path::root(), Scope::strict())
            .unwrap_err();
        assert_eq!(err.reason(), "Field should never be used.");
        assert_eq!(core.validate_at(None, &Path::root(), Scope::strict()), Ok(None));
    }
}
