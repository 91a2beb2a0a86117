//! # Validator Steps
//!
//! A [`Validator`] is one registered step of a schema. Steps run in
//! registration order after the type check. A step may return a new value,
//! which replaces the in-flight value for the remaining steps and becomes
//! the result; this is how shapes, collections and tuples rebuild their
//! input with defaults filled in.

use std::fmt;
use std::sync::Arc;

use optimal_core::{Path, ValidationResult, Value};

use crate::scope::Scope;
use crate::state::State;

type StepFn =
    dyn Fn(&Value, &Path, Scope<'_>, &State) -> ValidationResult<Option<Value>> + Send + Sync;

/// Whether a step only checks or also rebuilds its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Pure check. Skipped in lenient mode.
    Check,
    /// Rebuilds the value. Runs in every mode and consults the mode itself.
    Transform,
}

/// A registered validation step.
#[derive(Clone)]
pub struct Validator {
    step: Arc<StepFn>,
    role: Role,
    skip_if_optional: bool,
}

impl Validator {
    /// A step that only checks the value.
    pub fn check<F>(check: F) -> Self
    where
        F: Fn(&Value, &Path, Scope<'_>) -> ValidationResult<()> + Send + Sync + 'static,
    {
        Self {
            step: Arc::new(move |value: &Value, path: &Path, scope: Scope<'_>, _: &State| {
                check(value, path, scope).map(|()| None)
            }),
            role: Role::Check,
            skip_if_optional: false,
        }
    }

    /// A step that may replace the value.
    pub fn transform<F>(transform: F) -> Self
    where
        F: Fn(&Value, &Path, Scope<'_>, &State) -> ValidationResult<Option<Value>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            step: Arc::new(transform),
            role: Role::Transform,
            skip_if_optional: false,
        }
    }

    /// Skip this step when the field is optional and its value equals the
    /// default, so content constraints don't fire against an unset field.
    pub fn skip_if_optional(mut self) -> Self {
        self.skip_if_optional = true;
        self
    }

    /// The step's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the step should be bypassed for `value`.
    pub fn skips(&self, value: &Value, state: &State) -> bool {
        self.skip_if_optional && !state.required && state.default.matches(value)
    }

    /// Run the step.
    pub fn run(
        &self,
        value: &Value,
        path: &Path,
        scope: Scope<'_>,
        state: &State,
    ) -> ValidationResult<Option<Value>> {
        (self.step)(value, path, scope, state)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("role", &self.role)
            .field("skip_if_optional", &self.skip_if_optional)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use optimal_core::ValidationError;

    #[test]
    fn checks_never_replace_the_value() {
        let validator = Validator::check(|_, _, _| Ok(()));
        let state = State::new(Kind::String);
        let result = validator.run(&Value::from("x"), &Path::root(), Scope::strict(), &state);
        assert_eq!(result, Ok(None));
        assert_eq!(validator.role(), Role::Check);
    }

    #[test]
    fn check_errors_propagate() {
        let validator =
            Validator::check(|_, path, _| Err(ValidationError::new(path, "Nope.")));
        let state = State::new(Kind::String);
        let err = validator
            .run(&Value::from("x"), &Path::root().key("a"), Scope::strict(), &state)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid field \"a\". Nope.");
    }

    #[test]
    fn optional_skip_only_applies_to_default_values() {
        let validator = Validator::check(|_, _, _| Ok(())).skip_if_optional();
        let mut state = State::new(Kind::String);
        assert!(validator.skips(&Value::from(""), &state));
        assert!(!validator.skips(&Value::from("set"), &state));
        state.required = true;
        assert!(!validator.skips(&Value::from(""), &state));
    }
}
