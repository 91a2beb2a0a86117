//! # Blueprint Entry Point
//!
//! A blueprint is a map of field names to schemas describing a whole
//! options object. [`validate_blueprint`] treats it as a shape (exact
//! unless [`BlueprintOptions::unknown`] is set), validates the input with
//! the input itself as both the current and the root object, and labels any
//! error with the configured schema name and file.
//!
//! [`Optimal`] builds the shape once for repeated validation.

use optimal_core::{ErrorContext, Mode, Path, ValidationResult, Value};
use serde::Deserialize;

use crate::schema::{Schema, SchemaRef};
use crate::schemas::{shape, ShapeSchema};
use crate::scope::Scope;

/// Blueprint validation options. Deserializable, so they can come from a
/// config file:
///
/// ```
/// use optimal_core::Mode;
/// use optimal_schema::BlueprintOptions;
///
/// let options: BlueprintOptions =
///     serde_json::from_str(r#"{"name": "Server", "mode": "production"}"#).unwrap();
/// assert_eq!(options.name.as_deref(), Some("Server"));
/// assert_eq!(options.mode, Mode::Lenient);
/// assert!(!options.unknown);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlueprintOptions {
    /// Pass undeclared fields through instead of rejecting them.
    pub unknown: bool,
    /// Schema label prefixed to error messages.
    pub name: Option<String>,
    /// Source label appended to error messages.
    pub file: Option<String>,
    /// Validation mode.
    pub mode: Mode,
}

impl BlueprintOptions {
    fn context(&self) -> ErrorContext {
        ErrorContext {
            schema: self.name.clone(),
            file: self.file.clone(),
        }
    }
}

/// A blueprint built once and validated many times.
#[derive(Debug, Clone)]
pub struct Optimal {
    schema: ShapeSchema,
    options: BlueprintOptions,
}

impl Optimal {
    /// Build the blueprint's shape.
    pub fn new<I, K>(blueprint: I, options: BlueprintOptions) -> Self
    where
        I: IntoIterator<Item = (K, SchemaRef)>,
        K: Into<String>,
    {
        let schema = shape(blueprint).exact_if(!options.unknown);
        Self { schema, options }
    }

    /// The options this blueprint validates with.
    pub fn options(&self) -> &BlueprintOptions {
        &self.options
    }

    /// The underlying shape.
    pub fn schema(&self) -> &ShapeSchema {
        &self.schema
    }

    /// Validate `value`, returning it with defaults filled in.
    pub fn validate(&self, value: &Value) -> ValidationResult<Value> {
        self.schema
            .validate_at(Some(value), &Path::root(), Scope::root_of(value, self.options.mode))
            .map(|result| result.unwrap_or_else(|| value.clone()))
            .map_err(|err| err.with_context(&self.options.context()))
    }
}

/// Build a reusable blueprint validator.
pub fn optimal<I, K>(blueprint: I, options: BlueprintOptions) -> Optimal
where
    I: IntoIterator<Item = (K, SchemaRef)>,
    K: Into<String>,
{
    Optimal::new(blueprint, options)
}

/// Validate `value` against `blueprint` once.
pub fn validate_blueprint<I, K>(
    value: &Value,
    blueprint: I,
    options: &BlueprintOptions,
) -> ValidationResult<Value>
where
    I: IntoIterator<Item = (K, SchemaRef)>,
    K: Into<String>,
{
    Optimal::new(blueprint, options.clone()).validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criteria;
    use crate::{fields, number, string};
    use serde_json::json;

    fn named() -> BlueprintOptions {
        BlueprintOptions {
            name: Some("Server".into()),
            file: Some("server.json".into()),
            ..BlueprintOptions::default()
        }
    }

    #[test]
    fn unknown_fields_are_rejected_by_default() {
        let err = validate_blueprint(
            &Value::from(json!({"port": 1, "debug": true})),
            fields! { "port" => number() },
            &BlueprintOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown fields: debug.");
    }

    #[test]
    fn unknown_option_passes_fields_through() {
        let options = BlueprintOptions {
            unknown: true,
            ..BlueprintOptions::default()
        };
        let result = validate_blueprint(
            &Value::from(json!({"debug": true})),
            fields! { "port" => number().default(80) },
            &options,
        );
        assert_eq!(result, Ok(Value::from(json!({"port": 80, "debug": true}))));
    }

    #[test]
    fn errors_carry_name_and_file() {
        let err = validate_blueprint(
            &Value::from(json!({"port": "x"})),
            fields! { "port" => number() },
            &named(),
        )
        .unwrap_err();
        assert_eq!(err.schema(), Some("Server"));
        assert_eq!(err.file(), Some("server.json"));
        assert_eq!(
            err.to_string(),
            "Server: Invalid field \"port\". Must be a number. (in server.json)"
        );
    }

    #[test]
    fn top_level_fields_see_their_siblings() {
        let blueprint = optimal(
            fields! {
                "user" => string().or(&["token"]),
                "token" => string().nullable(),
            },
            BlueprintOptions::default(),
        );
        let err = blueprint.validate(&Value::from(json!({}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid field \"user\". At least one of these fields must be defined: token, user."
        );
        assert!(blueprint.validate(&Value::from(json!({"token": "t"}))).is_ok());
    }

    #[test]
    fn lenient_mode_defaults_instead_of_failing() {
        let options = BlueprintOptions {
            mode: Mode::Lenient,
            ..BlueprintOptions::default()
        };
        let result = validate_blueprint(
            &Value::from(json!({"port": "8080", "extra": 1})),
            fields! { "port" => number().required(), "host" => string().required() },
            &options,
        );
        assert_eq!(
            result,
            Ok(Value::from(json!({"port": 8080, "host": "", "extra": 1})))
        );
    }
}
