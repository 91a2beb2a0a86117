//! Class instance, function and custom schemas.

use optimal_core::{Class, Function, Instance, Value};

use super::schema_type;
use crate::criteria::{common, instance as instance_criteria, CustomResult};
use crate::kind::Kind;
use crate::scope::Scope;

schema_type!(
    /// Class instances. Nullable and `null` by default.
    InstanceSchema
);

/// A class instance schema.
pub fn instance() -> InstanceSchema {
    InstanceSchema::from_kind(Kind::Instance)
}

impl InstanceSchema {
    /// Replace the default.
    pub fn default(self, value: Instance) -> Self {
        self.with_default(Value::Instance(value))
    }

    /// Require an instance of `class` or one of its subclasses. With
    /// `loose`, classes are also matched by name.
    pub fn of(mut self, class: &Class, loose: bool) -> Self {
        let step = instance_criteria::of(self.core.state_mut(), class, loose);
        self.push(step)
    }
}

schema_type!(
    /// Callables. Nullable and `null` by default.
    FunctionSchema
);

/// A function schema.
pub fn func() -> FunctionSchema {
    FunctionSchema::from_kind(Kind::Function)
}

impl FunctionSchema {
    /// Replace the default.
    pub fn default(self, value: Function) -> Self {
        self.with_default(Value::Function(value))
    }
}

schema_type!(
    /// Any value accepted by a callback. No type check runs; unions try
    /// custom members against every input.
    CustomSchema
);

/// A schema validated entirely by `callback`, defaulting to `default`.
pub fn custom<F>(callback: F, default: impl Into<Value>) -> CustomSchema
where
    F: Fn(&Value, Scope<'_>) -> CustomResult + Send + Sync + 'static,
{
    let mut schema = CustomSchema::from_kind(Kind::Custom);
    let step = common::custom(schema.core.state_mut(), callback);
    schema.push(step).with_default(default.into())
}

impl CustomSchema {
    /// Replace the default.
    pub fn default(self, value: impl Into<Value>) -> Self {
        self.with_default(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use optimal_core::Map;

    #[test]
    fn instances_default_to_null() {
        let schema = instance().of(&Class::new("Plugin"), false);
        assert_eq!(schema.type_name(), "Plugin");
        assert_eq!(schema.validate_missing(), Ok(Some(Value::Null)));
    }

    #[test]
    fn instance_rejects_plain_objects() {
        let schema = instance().of(&Class::new("Plugin"), false);
        let err = schema.validate(&Value::Object(Map::new())).unwrap_err();
        assert_eq!(err.reason(), "Must be a class instance.");
    }

    #[test]
    fn functions_are_accepted() {
        let callable = Function::new("noop", |_: &[Value]| Value::Null);
        let result = func().validate(&Value::Function(callable.clone()));
        assert_eq!(result, Ok(Value::Function(callable)));
        assert_eq!(
            func().validate(&Value::from(1)).unwrap_err().reason(),
            "Must be a function."
        );
    }

    #[test]
    fn custom_callback_decides() {
        let even = custom(
            |value, _| match value.as_f64() {
                Some(n) if n % 2.0 == 0.0 => Ok(()),
                _ => Err("Must be even.".into()),
            },
            0,
        );
        assert_eq!(even.validate(&Value::from(4)), Ok(Value::Number(4.0)));
        assert_eq!(
            even.validate(&Value::from("x")).unwrap_err().reason(),
            "Must be even."
        );
        assert_eq!(even.validate_missing(), Ok(Some(Value::Number(0.0))));
    }
}
