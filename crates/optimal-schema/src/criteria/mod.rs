//! # Criterion Library
//!
//! A criterion is a builder-time function `(&mut State, args..) ->
//! Option<Validator>`: it configures the schema state, registers a
//! validation step, or both. The functions here are the whole catalogue;
//! schema types expose them as chainable methods.
//!
//! ## Organization
//!
//! - [`common`]: criteria every kind supports, surfaced through the
//!   [`Criteria`] trait.
//! - [`number`], [`string`], [`boolean`], [`date`]: scalar constraints.
//! - [`collection`], [`shape`], [`tuple`], [`union`], [`instance`]:
//!   structural resolvers that rebuild or route the value.

pub mod boolean;
pub mod collection;
pub mod common;
pub mod date;
pub mod instance;
pub mod number;
pub mod shape;
pub mod string;
pub mod tuple;
pub mod union;

use optimal_core::{Path, Value};

use crate::factory::SchemaCore;
use crate::scope::Scope;
use crate::state::State;
use crate::validator::Validator;

pub use common::{CustomError, CustomResult};

/// Common criteria available on every schema type.
///
/// Each method consumes the schema and returns it, so chains read
/// fluently and a built schema can no longer change.
pub trait Criteria: Sized {
    /// The schema's core, for applying criteria.
    fn core_mut(&mut self) -> &mut SchemaCore;

    /// Apply an arbitrary criterion.
    fn criterion<F>(mut self, criterion: F) -> Self
    where
        F: FnOnce(&mut State) -> Option<Validator>,
    {
        self.core_mut().apply(criterion);
        self
    }

    /// Accept null.
    fn nullable(self) -> Self {
        self.criterion(|state| common::nullable(state, true))
    }

    /// Reject null.
    fn not_nullable(self) -> Self {
        self.criterion(|state| common::nullable(state, false))
    }

    /// Reject undefined input instead of defaulting it.
    fn required(self) -> Self {
        self.criterion(|state| common::required(state, true))
    }

    /// Default undefined input.
    fn not_required(self) -> Self {
        self.criterion(|state| common::required(state, false))
    }

    /// Reject any defined value.
    fn never(self) -> Self {
        self.criterion(common::never)
    }

    /// Log `message` whenever a defined value is validated.
    fn deprecate(self, message: impl Into<String>) -> Self {
        self.criterion(|state| common::deprecate(state, message))
    }

    /// Run a callback against the value and its sibling scope.
    fn custom<F>(self, callback: F) -> Self
    where
        F: Fn(&Value, Scope<'_>) -> CustomResult + Send + Sync + 'static,
    {
        self.criterion(|state| common::custom(state, callback))
    }

    /// Only accept the default value.
    ///
    /// # Panics
    ///
    /// When the schema has no fixed default of its own kind.
    #[track_caller]
    fn only(self) -> Self {
        let mut this = self;
        if let Some(validator) = common::only(this.core_mut().state_mut()) {
            this.core_mut().apply(|_| Some(validator));
        }
        this
    }

    /// If any of `keys` or this field is present, all must be.
    ///
    /// # Panics
    ///
    /// When `keys` is empty.
    #[track_caller]
    fn and(self, keys: &[&str]) -> Self {
        let mut this = self;
        let validator = common::and(this.core_mut().state_mut(), keys);
        this.core_mut().apply(|_| validator);
        this
    }

    /// At least one of `keys` or this field must be present.
    ///
    /// # Panics
    ///
    /// When `keys` is empty.
    #[track_caller]
    fn or(self, keys: &[&str]) -> Self {
        let mut this = self;
        let validator = common::or(this.core_mut().state_mut(), keys);
        this.core_mut().apply(|_| validator);
        this
    }

    /// Exactly one of `keys` or this field must be present.
    ///
    /// # Panics
    ///
    /// When `keys` is empty.
    #[track_caller]
    fn xor(self, keys: &[&str]) -> Self {
        let mut this = self;
        let validator = common::xor(this.core_mut().state_mut(), keys);
        this.core_mut().apply(|_| validator);
        this
    }

    /// Compute the default per validation call from the field's path and
    /// scope.
    fn default_with<F>(self, factory: F) -> Self
    where
        F: Fn(&Path, Scope<'_>) -> Value + Send + Sync + 'static,
    {
        self.criterion(|state| common::default_with(state, factory))
    }
}
