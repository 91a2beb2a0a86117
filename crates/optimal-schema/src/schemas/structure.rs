//! Array, object, shape, tuple and union schemas.

use optimal_core::{Map, Value};

use super::{schema_type, StringSchema};
use crate::criteria::{collection, shape as shape_criteria, tuple as tuple_criteria, union as union_criteria};
use crate::kind::Kind;
use crate::schema::SchemaRef;

schema_type!(
    /// Arrays, optionally of a single element schema. Defaults to `[]`.
    ArraySchema
);

/// An array schema.
pub fn array() -> ArraySchema {
    ArraySchema::from_kind(Kind::Array)
}

impl ArraySchema {
    /// Replace the default.
    pub fn default(self, value: Vec<Value>) -> Self {
        self.with_default(Value::Array(value))
    }

    /// Validate every element against `element`.
    pub fn of(mut self, element: impl Into<SchemaRef>) -> Self {
        let step = collection::array_of(self.core.state_mut(), element.into());
        self.push(step)
    }

    /// Reject empty arrays.
    pub fn not_empty(mut self) -> Self {
        let step = collection::array_not_empty(self.core.state_mut());
        self.push(step)
    }

    /// Require exactly `size` elements.
    pub fn size_of(mut self, size: usize) -> Self {
        let step = collection::array_size_of(self.core.state_mut(), size);
        self.push(step)
    }
}

schema_type!(
    /// Plain objects used as maps, optionally of a single value schema.
    /// Defaults to `{}`.
    ObjectSchema
);

/// An object schema.
pub fn object() -> ObjectSchema {
    ObjectSchema::from_kind(Kind::Object)
}

impl ObjectSchema {
    /// Replace the default.
    pub fn default(self, value: Map) -> Self {
        self.with_default(Value::Object(value))
    }

    /// Validate every value against `schema`.
    pub fn of(mut self, schema: impl Into<SchemaRef>) -> Self {
        let step = collection::object_of(self.core.state_mut(), schema.into());
        self.push(step)
    }

    /// Validate every key against `key`.
    pub fn keys_of(mut self, key: StringSchema) -> Self {
        let step = collection::keys_of(self.core.state_mut(), key.into());
        self.push(step)
    }

    /// Reject objects without properties.
    pub fn not_empty(mut self) -> Self {
        let step = collection::object_not_empty(self.core.state_mut());
        self.push(step)
    }

    /// Require exactly `size` properties.
    pub fn size_of(mut self, size: usize) -> Self {
        let step = collection::object_size_of(self.core.state_mut(), size);
        self.push(step)
    }
}

schema_type!(
    /// Objects (or class instances) with a fixed set of named fields.
    /// Defaults to `{}`, so a missing shape resolves to its fields'
    /// defaults.
    ShapeSchema
);

/// A shape with the given fields, validated in order.
pub fn shape<I, K>(fields: I) -> ShapeSchema
where
    I: IntoIterator<Item = (K, SchemaRef)>,
    K: Into<String>,
{
    let fields = fields
        .into_iter()
        .map(|(name, schema)| (name.into(), schema))
        .collect();
    let mut schema = ShapeSchema::from_kind(Kind::Shape);
    let step = shape_criteria::of(schema.core.state_mut(), fields);
    schema.push(step)
}

impl ShapeSchema {
    /// Replace the default.
    pub fn default(self, value: Map) -> Self {
        self.with_default(Value::Object(value))
    }

    /// Reject undeclared fields.
    pub fn exact(self) -> Self {
        self.exact_if(true)
    }

    /// Reject undeclared fields when `exact` is set, pass them through
    /// otherwise.
    pub fn exact_if(mut self, exact: bool) -> Self {
        let step = shape_criteria::exact(self.core.state_mut(), exact);
        self.push(step)
    }
}

schema_type!(
    /// Fixed-length arrays with one schema per position. Defaults to `[]`,
    /// which resolves to every position's default.
    TupleSchema
);

/// A tuple of the given positional schemas.
pub fn tuple(items: Vec<SchemaRef>) -> TupleSchema {
    let mut schema = TupleSchema::from_kind(Kind::Tuple);
    let step = tuple_criteria::of(schema.core.state_mut(), items);
    schema.push(step)
}

impl TupleSchema {
    /// Replace the default.
    pub fn default(self, value: Vec<Value>) -> Self {
        self.with_default(Value::Array(value))
    }
}

schema_type!(
    /// Values matching any one of several member schemas.
    UnionSchema
);

/// A union of `members`, defaulting to `default`.
///
/// # Panics
///
/// When `members` is empty or contains another union.
#[track_caller]
pub fn union(members: Vec<SchemaRef>, default: impl Into<Value>) -> UnionSchema {
    let mut schema = UnionSchema::from_kind(Kind::Union);
    let step = union_criteria::of(schema.core.state_mut(), members);
    schema.push(step).with_default(default.into())
}

impl UnionSchema {
    /// Replace the default.
    pub fn default(self, value: impl Into<Value>) -> Self {
        self.with_default(value.into())
    }
}
