//! # optimal-schema — Schema Building & Recursive Validation
//!
//! Build a schema by chaining criteria onto a constructor, then validate
//! any number of inputs against it. Validation fills in defaults, casts
//! values to their kind, and reports the first failure with the path of
//! the offending field.
//!
//! ```
//! use optimal_schema::{array, fields, number, shape, string, Criteria, Schema, Value};
//! use serde_json::json;
//!
//! let server = shape(fields! {
//!     "host" => string().not_empty().required(),
//!     "port" => number().int().between_inclusive(1, 65535).default(8080),
//!     "tags" => array().of(string().kebab_case()),
//! });
//!
//! let value = server.validate(&json!({"host": "localhost"}).into()).unwrap();
//! assert_eq!(value, Value::from(json!({"host": "localhost", "port": 8080, "tags": []})));
//!
//! let err = server.validate(&json!({"host": "a", "tags": ["Bad"]}).into()).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid field \"tags[0]\". String must be in kebab case.");
//! ```
//!
//! ## Layers
//!
//! - [`state`], [`validator`], [`factory`]: the per-schema state, registered
//!   validation steps, and the single validation algorithm every kind runs.
//! - [`kind`]: the closed set of kinds with their type checks, casts and
//!   initial defaults.
//! - [`criteria`]: the criterion library. Common criteria come through
//!   the [`Criteria`] trait; kind-specific ones are inherent methods.
//! - [`schemas`]: one builder type per kind plus [`lazy`] for recursion.
//! - [`blueprint`]: the top-level entry that validates a whole options
//!   object and labels errors with a schema name and file.
//!
//! ## Modes
//!
//! [`Mode::Strict`] runs every check. [`Mode::Lenient`] skips the
//! required/never/null/type checks and every pure check, but still
//! applies defaults, structural rebuilding and casts.
//!
//! ## Logging
//!
//! Deprecated fields are reported with `tracing::info!`, rejected union
//! candidates with `tracing::debug!`. No subscriber is installed here.
//!
//! ## Crate Policy
//!
//! - Depends only on `optimal-core` internally.
//! - Built schemas are immutable and `Send + Sync`.
//! - Caller misuse while building (empty key lists, nested unions,
//!   inverted ranges) panics; invalid input never does.

pub mod blueprint;
pub mod criteria;
pub mod factory;
pub mod kind;
pub mod schema;
pub mod schemas;
pub mod scope;
pub mod state;
pub mod validator;

pub use blueprint::{optimal, validate_blueprint, BlueprintOptions, Optimal};
pub use criteria::{Criteria, CustomError, CustomResult};
pub use factory::SchemaCore;
pub use kind::Kind;
pub use schema::{Schema, SchemaRef};
pub use schemas::{
    array, boolean, custom, date, func, instance, lazy, number, object, shape, string, tuple,
    union, ArraySchema, BooleanSchema, CustomSchema, DateSchema, FunctionSchema, InstanceSchema,
    LazySchema, NumberSchema, ObjectSchema, ShapeSchema, StringSchema, TupleSchema, UnionSchema,
};
pub use scope::Scope;
pub use state::{DefaultValue, Metadata, State};
pub use validator::{Role, Validator};

pub use optimal_core::{Class, Function, Instance, Map, Mode, Path, ValidationError, ValidationResult, Value};
