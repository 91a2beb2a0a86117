//! # The Schema Interface
//!
//! [`Schema`] is the object-safe interface every built schema exposes.
//! [`SchemaRef`] is the shared, type-erased handle structural schemas use
//! to hold their members: any concrete schema converts into one with
//! `.into()`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use optimal_core::{Mode, Path, ValidationResult, Value};

use crate::kind::Kind;
use crate::scope::Scope;

/// A built validator/caster for one kind of value.
///
/// Built schemas are immutable: every criterion is applied while building
/// (builders are consumed by value), so `validate_*` only ever reads.
pub trait Schema: Send + Sync {
    /// Kind of value this schema accepts.
    fn kind(&self) -> Kind;

    /// Kind a union routes values by. Deferred schemas resolve it on each
    /// call instead of at build time.
    fn resolved_kind(&self) -> Kind {
        self.kind()
    }

    /// Type tag, e.g. `array<string>` or `number | string`.
    fn type_name(&self) -> String;

    /// Validate a possibly-undefined value at `path` within `scope`.
    ///
    /// Returns the validated (possibly defaulted, rebuilt or cast) value, or
    /// `None` when an undefined input has no default.
    fn validate_at(
        &self,
        value: Option<&Value>,
        path: &Path,
        scope: Scope<'_>,
    ) -> ValidationResult<Option<Value>>;

    /// Validate a defined value at the root in strict mode.
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        self.validate_with(value, Mode::Strict)
    }

    /// Validate a defined value at the root in the given mode.
    fn validate_with(&self, value: &Value, mode: Mode) -> ValidationResult<Value> {
        self.validate_at(Some(value), &Path::root(), Scope::new(mode))
            .map(|result| result.unwrap_or(Value::Null))
    }

    /// Resolve an undefined value at the root in strict mode.
    fn validate_missing(&self) -> ValidationResult<Option<Value>> {
        self.validate_at(None, &Path::root(), Scope::strict())
    }
}

/// Shared handle to any schema.
#[derive(Clone)]
pub struct SchemaRef(Arc<dyn Schema>);

impl SchemaRef {
    /// Wrap a schema.
    pub fn new<S: Schema + 'static>(schema: S) -> Self {
        Self(Arc::new(schema))
    }
}

impl<S: Schema + 'static> From<S> for SchemaRef {
    fn from(schema: S) -> Self {
        Self::new(schema)
    }
}

impl Deref for SchemaRef {
    type Target = dyn Schema;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaRef").field(&self.0.type_name()).finish()
    }
}

/// Collect schemas of different kinds into a `Vec<SchemaRef>`.
///
/// ```
/// use optimal_schema::{number, schemas, string, union, Schema};
///
/// let id = union(schemas![number(), string()], 0);
/// assert_eq!(id.type_name(), "number | string");
/// ```
#[macro_export]
macro_rules! schemas {
    ($($schema:expr),* $(,)?) => {
        vec![$($crate::SchemaRef::from($schema)),*]
    };
}

/// Collect named field schemas for [`shape`](crate::shape) or a blueprint.
///
/// ```
/// use optimal_schema::{fields, number, shape, string, Schema};
///
/// let server = shape(fields! { "host" => string(), "port" => number().default(80) });
/// assert_eq!(server.type_name(), "shape<{host: string, port: number}>");
/// ```
#[macro_export]
macro_rules! fields {
    ($($name:expr => $schema:expr),* $(,)?) => {
        vec![$(($name, $crate::SchemaRef::from($schema))),*]
    };
}
