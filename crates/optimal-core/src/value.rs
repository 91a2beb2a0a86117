//! # Value Model
//!
//! The closed universe of in-memory values that schemas validate and cast.
//!
//! ## Undefined vs. Null
//!
//! There is deliberately no `Undefined` variant. A missing field is the
//! absence of a value (`None`), which lets the validation algorithm
//! substitute defaults; [`Value::Null`] is an explicit null, which only
//! nullable schemas accept.
//!
//! ## Plain objects vs. instances
//!
//! [`Value::Object`] is a plain record. [`Value::Instance`] is an object
//! built from a [`Class`]: it also carries fields, but it is never
//! reconstructed by shape validation and it only matches instance-aware
//! schemas.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::ConversionError;

/// Field map used by plain objects and instances. Keys are kept sorted so
/// rebuilt objects and error listings are deterministic.
pub type Map = BTreeMap<String, Value>;

/// An in-memory value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Number. Validity (finite, not NaN) is checked by number schemas.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// UTC timestamp.
    Date(DateTime<Utc>),
    /// Ordered list.
    Array(Vec<Value>),
    /// Plain record.
    Object(Map),
    /// Class instance with its own fields.
    Instance(Instance),
    /// Callable value.
    Function(Function),
}

/// Structural category of a value, used for type names in messages and for
/// union member compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `Value::Null`.
    Null,
    /// `Value::Bool`.
    Boolean,
    /// `Value::Number`.
    Number,
    /// `Value::String`.
    String,
    /// `Value::Date`.
    Date,
    /// `Value::Array`.
    Array,
    /// `Value::Object`.
    Object,
    /// `Value::Instance`.
    Instance,
    /// `Value::Function`.
    Function,
}

impl Category {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Null => "null",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Date => "date",
            Category::Array => "array",
            Category::Object => "object",
            Category::Instance => "instance",
            Category::Function => "function",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classes and instances
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ClassInfo {
    name: String,
    parent: Option<Class>,
}

/// A reference to a class. Clones share identity; two classes created
/// separately are distinct even when their names are equal.
#[derive(Clone)]
pub struct Class(Arc<ClassInfo>);

impl Class {
    /// Declare a new root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInfo {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declare a subclass of `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self(Arc::new(ClassInfo {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The direct parent class, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Identity comparison.
    pub fn is(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether `self` is `other` or inherits from it.
    ///
    /// With `loose` set, a class anywhere in the chain whose name equals
    /// `other.name()` also matches. This covers classes declared more than
    /// once (e.g. by two copies of the same plugin).
    pub fn inherits(&self, other: &Class, loose: bool) -> bool {
        let mut cursor = Some(self);
        while let Some(class) = cursor {
            if class.is(other) || (loose && class.name() == other.name()) {
                return true;
            }
            cursor = class.parent();
        }
        false
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

/// An object constructed from a [`Class`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: Class,
    fields: Map,
}

impl Instance {
    /// Create an instance of `class` with the given fields.
    pub fn new(class: &Class, fields: Map) -> Self {
        Self {
            class: class.clone(),
            fields,
        }
    }

    /// The class this instance was built from.
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// The instance's own fields.
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Whether this instance was built from `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class, loose: bool) -> bool {
        self.class.inherits(class, loose)
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value. Equality is identity.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    call: Arc<Callable>,
}

impl Function {
    /// Wrap a named closure.
    pub fn new<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            call: Arc::new(call),
        }
    }

    /// Wrap an anonymous closure.
    pub fn anonymous<F>(call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            call: Arc::new(call),
        }
    }

    /// The function name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Function({name})"),
            None => f.write_str("Function(<anonymous>)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl Value {
    /// The structural category of this value.
    pub fn category(&self) -> Category {
        match self {
            Value::Null => Category::Null,
            Value::Bool(_) => Category::Boolean,
            Value::Number(_) => Category::Number,
            Value::String(_) => Category::String,
            Value::Date(_) => Category::Date,
            Value::Array(_) => Category::Array,
            Value::Object(_) => Category::Object,
            Value::Instance(_) => Category::Instance,
            Value::Function(_) => Category::Function,
        }
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean payload.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Date payload.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Array payload.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Plain-object payload. Instances return `None`.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Instance payload.
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Function payload.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Field map of a plain object or an instance.
    pub fn fields(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            Value::Instance(instance) => Some(instance.fields()),
            _ => None,
        }
    }

    /// Look up a field of a plain object or an instance.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields().and_then(|fields| fields.get(key))
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Value::Instance(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = ConversionError;

    /// Dates become RFC 3339 strings; whole numbers within the `i64` range
    /// become JSON integers.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let category = value.category();
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => {
                if !n.is_finite() {
                    return Err(ConversionError::NonFiniteNumber(n));
                }
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    serde_json::Value::from(n as i64)
                } else {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or(ConversionError::NonFiniteNumber(n))?
                }
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Array(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| serde_json::Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Instance(_) | Value::Function(_) => {
                return Err(ConversionError::Unrepresentable(category))
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Value {
    /// Scalars render bare (`foo`, `5`); strings nested inside arrays and
    /// objects are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => write_nested(other, f),
        }
    }
}

fn write_nested(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => write!(f, "{s:?}"),
        Value::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(map) => write_map(map, f),
        Value::Instance(instance) => {
            write!(f, "{} ", instance.class().name())?;
            write_map(instance.fields(), f)
        }
        Value::Function(func) => match func.name() {
            Some(name) => write!(f, "[function {name}]"),
            None => f.write_str("[function]"),
        },
    }
}

fn write_map(map: &Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, item)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: ")?;
        write_nested(item, f)?;
    }
    f.write_str("}")
}
