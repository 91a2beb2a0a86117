//! Deferred schemas, for recursive structures.

use std::fmt;
use std::sync::Arc;

use optimal_core::{Path, ValidationResult, Value};

use crate::kind::Kind;
use crate::schema::{Schema, SchemaRef};
use crate::scope::Scope;

type Factory = dyn Fn() -> SchemaRef + Send + Sync;

/// A schema built by a factory on every validation call.
///
/// The factory only runs while validating, never while building, so a
/// schema may refer to itself through `lazy`:
///
/// ```
/// use optimal_schema::{array, fields, lazy, shape, string, Schema, ShapeSchema};
/// use serde_json::json;
///
/// fn node() -> ShapeSchema {
///     shape(fields! {
///         "name" => string(),
///         "children" => array().of(lazy(node)),
///     })
/// }
///
/// let tree = node().validate(&json!({"children": [{"name": "leaf"}]}).into()).unwrap();
/// assert_eq!(
///     serde_json::Value::try_from(tree).unwrap(),
///     json!({"name": "", "children": [{"name": "leaf", "children": []}]})
/// );
/// ```
#[derive(Clone)]
pub struct LazySchema {
    factory: Arc<Factory>,
}

/// Defer to the schema `factory` returns.
pub fn lazy<F, S>(factory: F) -> LazySchema
where
    F: Fn() -> S + Send + Sync + 'static,
    S: Into<SchemaRef>,
{
    LazySchema {
        factory: Arc::new(move || factory().into()),
    }
}

impl LazySchema {
    fn resolve(&self) -> SchemaRef {
        (self.factory)()
    }
}

impl Schema for LazySchema {
    /// Unresolved, a deferred schema behaves as a custom one: no type check
    /// of its own, tried by unions against every input.
    fn kind(&self) -> Kind {
        Kind::Custom
    }

    fn resolved_kind(&self) -> Kind {
        self.resolve().resolved_kind()
    }

    fn type_name(&self) -> String {
        "lazy".to_string()
    }

    fn validate_at(
        &self,
        value: Option<&Value>,
        path: &Path,
        scope: Scope<'_>,
    ) -> ValidationResult<Option<Value>> {
        self.resolve().validate_at(value, path, scope)
    }
}

impl fmt::Debug for LazySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySchema").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{number, schemas, string, union};

    #[test]
    fn resolves_on_every_call() {
        let schema = lazy(|| number().default(3));
        assert_eq!(schema.validate_missing(), Ok(Some(Value::Number(3.0))));
        assert_eq!(schema.resolved_kind(), Kind::Number);
        assert_eq!(schema.kind(), Kind::Custom);
    }

    #[test]
    fn lazy_union_member_is_rejected_at_validation() {
        let schema = union(
            schemas![string(), lazy(|| union(schemas![number()], 0))],
            "",
        );
        let err = schema.validate(&Value::from(1)).unwrap_err();
        assert_eq!(err.reason(), "Nested unions are not supported.");
    }
}
