//! # Schema Kinds
//!
//! A closed enum of every schema kind. Each variant bundles the behavior
//! that depends on the kind alone: the type check and its message, the
//! cast applied to the final value, the default a freshly built schema
//! starts with, and which value categories a union may try it against.
//! All of it is resolved by exhaustive `match`, so adding a kind forces
//! every rule to be decided.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use optimal_core::{is_valid_number, Category, Map, Path, Value};

use crate::scope::Scope;
use crate::state::DefaultValue;

/// The kind of value a schema validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// UTF-8 strings.
    String,
    /// Finite numbers.
    Number,
    /// Booleans.
    Boolean,
    /// Dates, also accepted as RFC 3339 strings or millisecond timestamps.
    Date,
    /// Arrays, optionally of one element schema.
    Array,
    /// Plain objects, optionally of one value schema.
    Object,
    /// Objects with a declared field set.
    Shape,
    /// Fixed-position arrays.
    Tuple,
    /// One of several member schemas.
    Union,
    /// Class instances.
    Instance,
    /// Callables.
    Function,
    /// Anything; validated by a callback only.
    Custom,
}

impl Kind {
    /// Base type tag, before structural criteria extend it.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Shape => "shape",
            Kind::Tuple => "tuple",
            Kind::Union => "union",
            Kind::Instance => "instance",
            Kind::Function => "function",
            Kind::Custom => "custom",
        }
    }

    /// Type check run against every defined, non-null value.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Kind::String => matches!(value, Value::String(_)),
            Kind::Number => matches!(value, Value::Number(n) if is_valid_number(*n)),
            Kind::Boolean => matches!(value, Value::Bool(_)),
            Kind::Date => to_date(value).is_some(),
            Kind::Array | Kind::Tuple => matches!(value, Value::Array(_)),
            Kind::Object => matches!(value, Value::Object(_)),
            Kind::Shape => matches!(value, Value::Object(_) | Value::Instance(_)),
            Kind::Instance => matches!(value, Value::Instance(_)),
            Kind::Function => matches!(value, Value::Function(_)),
            Kind::Union | Kind::Custom => true,
        }
    }

    /// Message raised when [`Kind::check`] fails.
    pub fn type_error(&self) -> &'static str {
        match self {
            Kind::String => "Must be a string.",
            Kind::Number => "Must be a number.",
            Kind::Boolean => "Must be a boolean.",
            Kind::Date => "Must be a string, number, or date.",
            Kind::Array => "Must be an array.",
            Kind::Object => "Must be a plain object.",
            Kind::Shape => "Must be a shaped object.",
            Kind::Tuple => "Must be a tuple.",
            Kind::Instance => "Must be a class instance.",
            Kind::Function => "Must be a function.",
            Kind::Union | Kind::Custom => "Invalid value.",
        }
    }

    /// Coerce a final value. Values that cannot be coerced are returned
    /// unchanged; in strict mode they have already passed the type check.
    pub fn cast(&self, value: Value) -> Value {
        match (*self, value) {
            (Kind::String, Value::Number(n)) => Value::String(n.to_string()),
            (Kind::String, Value::Bool(b)) => Value::String(b.to_string()),
            (Kind::Number, Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(n) => Value::Number(n),
                Err(_) => Value::String(s),
            },
            (Kind::Number, Value::Bool(b)) => Value::Number(if b { 1.0 } else { 0.0 }),
            (Kind::Boolean, Value::String(s)) => match s.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(s),
            },
            (Kind::Boolean, Value::Number(n)) => Value::Bool(n != 0.0),
            (Kind::Date, value) => match to_date(&value) {
                Some(date) => Value::Date(date),
                None => value,
            },
            (_, value) => value,
        }
    }

    /// Default a freshly built schema of this kind starts with.
    ///
    /// Unions and custom schemas have no natural default, so their
    /// constructors take one explicitly.
    pub fn initial_default(&self) -> DefaultValue {
        match self {
            Kind::String => DefaultValue::Static(Value::String(String::new())),
            Kind::Number => DefaultValue::Static(Value::Number(0.0)),
            Kind::Boolean => DefaultValue::Static(Value::Bool(false)),
            Kind::Date => DefaultValue::Factory(Arc::new(|_: &Path, _: Scope<'_>| {
                Value::Date(Utc::now())
            })),
            Kind::Array | Kind::Tuple => DefaultValue::Static(Value::Array(Vec::new())),
            Kind::Object | Kind::Shape => DefaultValue::Static(Value::Object(Map::new())),
            Kind::Instance | Kind::Function => DefaultValue::Static(Value::Null),
            Kind::Union | Kind::Custom => DefaultValue::Undefined,
        }
    }

    /// Kinds whose values are references default to null and accept it.
    pub fn nullable_by_default(&self) -> bool {
        matches!(self, Kind::Instance | Kind::Function)
    }

    /// Whether a union may try a member of this kind against a value of
    /// `category`.
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            Kind::Custom => true,
            Kind::Array | Kind::Tuple => category == Category::Array,
            Kind::Object => category == Category::Object,
            Kind::Shape => matches!(category, Category::Object | Category::Instance),
            Kind::String => category == Category::String,
            Kind::Number => category == Category::Number,
            Kind::Boolean => category == Category::Boolean,
            Kind::Date => category == Category::Date,
            Kind::Instance => category == Category::Instance,
            Kind::Function => category == Category::Function,
            Kind::Union => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interpret a value as a date: a date, an RFC 3339 string, or a
/// millisecond Unix timestamp.
pub fn to_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => Some(*date),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        Value::Number(n) if is_valid_number(*n) => {
            Utc.timestamp_millis_opt(*n as i64).single()
        }
        _ => None,
    }
}
