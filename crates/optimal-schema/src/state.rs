//! # Schema State
//!
//! One [`State`] per built schema. Criteria mutate it while the schema is
//! being built; once built it is only read, by the validation algorithm and
//! by validators that consult policy flags such as `exact`.

use std::fmt;
use std::sync::Arc;

use optimal_core::{Path, Value};

use crate::kind::Kind;
use crate::scope::Scope;

type DefaultFactory = dyn Fn(&Path, Scope<'_>) -> Value + Send + Sync;

/// Value substituted when the input is undefined.
#[derive(Clone)]
pub enum DefaultValue {
    /// No default: an undefined input stays undefined.
    Undefined,
    /// A fixed value, cloned on every use.
    Static(Value),
    /// Computed on every use from the field's path and scope.
    Factory(Arc<DefaultFactory>),
}

impl DefaultValue {
    /// Produce the default for a field at `path`.
    pub fn resolve(&self, path: &Path, scope: Scope<'_>) -> Option<Value> {
        match self {
            DefaultValue::Undefined => None,
            DefaultValue::Static(value) => Some(value.clone()),
            DefaultValue::Factory(factory) => Some(factory(path, scope)),
        }
    }

    /// The fixed default, if there is one.
    pub fn as_static(&self) -> Option<&Value> {
        match self {
            DefaultValue::Static(value) => Some(value),
            _ => None,
        }
    }

    /// Whether `value` equals the fixed default. Computed defaults never
    /// match.
    pub fn matches(&self, value: &Value) -> bool {
        self.as_static().is_some_and(|default| default == value)
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Undefined => f.write_str("Undefined"),
            DefaultValue::Static(value) => f.debug_tuple("Static").field(value).finish(),
            DefaultValue::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Kind-specific annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Message logged whenever a defined value is validated.
    pub deprecated: Option<String>,
    /// Shapes only: reject undeclared fields.
    pub exact: bool,
}

/// Shared configuration of one schema.
#[derive(Debug, Clone)]
pub struct State {
    /// Kind of value accepted.
    pub kind: Kind,
    /// Type tag, extended by structural criteria (`array<string>`).
    pub type_name: String,
    /// Substitute for undefined input.
    pub default: DefaultValue,
    /// Accept null.
    pub nullable: bool,
    /// Reject undefined input instead of defaulting.
    pub required: bool,
    /// Reject any defined input.
    pub never: bool,
    /// Kind-specific annotations.
    pub metadata: Metadata,
}

impl State {
    /// Fresh state with the kind's initial default and nullability.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            type_name: kind.name().to_string(),
            default: kind.initial_default(),
            nullable: kind.nullable_by_default(),
            required: false,
            never: false,
            metadata: Metadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_kind_rules() {
        let state = State::new(Kind::Number);
        assert_eq!(state.type_name, "number");
        assert!(state.default.matches(&Value::Number(0.0)));
        assert!(!state.nullable);

        let state = State::new(Kind::Instance);
        assert!(state.nullable);
        assert!(state.default.matches(&Value::Null));
    }

    #[test]
    fn factory_defaults_resolve_per_call() {
        let default = DefaultValue::Factory(Arc::new(|path: &Path, _: Scope<'_>| {
            Value::from(path.to_string())
        }));
        let path = Path::root().key("name");
        assert_eq!(default.resolve(&path, Scope::strict()), Some(Value::from("name")));
        assert!(!default.matches(&Value::from("name")));
    }

    #[test]
    fn undefined_default_resolves_to_none() {
        assert_eq!(DefaultValue::Undefined.resolve(&Path::root(), Scope::strict()), None);
    }
}
