//! # optimal-core — Foundational Types for optimal
//!
//! This crate defines the vocabulary every other `optimal` crate speaks:
//! the in-memory [`Value`] universe that schemas validate, the structured
//! [`Path`] that locates a value inside a nested input, the [`Mode`] that
//! selects strict or lenient validation, and the single [`ValidationError`]
//! type that every failure is reported through.
//!
//! ## Key Design Principles
//!
//! 1. **Undefined is absence.** There is no `Undefined` variant. A missing
//!    field is `None` in an `Option<&Value>`; `Value::Null` is an explicit
//!    null. The two are never conflated.
//!
//! 2. **Paths are structured.** Errors carry a [`Path`] of key/index
//!    segments, rendered once (`a.b[0].c`) when the error is displayed.
//!
//! 3. **Errors are formatted at the boundary.** A [`ValidationError`] stores
//!    the path, the reason, and optional schema/file context separately and
//!    only assembles the final message in `Display`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `optimal-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod helpers;
pub mod mode;
pub mod path;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ConversionError, ErrorContext, ValidationError, ValidationResult};
pub use helpers::{invariant, is_object, is_plain_object, is_present, is_valid_number, type_of};
pub use mode::{Mode, ModeParseError};
pub use path::{Path, Segment};
pub use value::{Category, Class, Function, Instance, Map, Value};
