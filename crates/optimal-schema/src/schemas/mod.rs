//! # Schema Types
//!
//! One concrete builder type per kind. Every type wraps a [`SchemaCore`],
//! implements [`Schema`] by delegating to it, and picks up the common
//! criteria through [`Criteria`]. Kind-specific criteria are inherent,
//! chainable methods.
//!
//! [`SchemaCore`]: crate::factory::SchemaCore
//! [`Schema`]: crate::schema::Schema
//! [`Criteria`]: crate::criteria::Criteria

/// Declare a schema type backed by a [`SchemaCore`](crate::factory::SchemaCore).
macro_rules! schema_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            core: $crate::factory::SchemaCore,
        }

        #[allow(dead_code)]
        impl $name {
            fn from_kind(kind: $crate::kind::Kind) -> Self {
                Self {
                    core: $crate::factory::SchemaCore::new(kind),
                }
            }

            fn push(mut self, validator: Option<$crate::validator::Validator>) -> Self {
                self.core.apply(|_| validator);
                self
            }

            fn with_default(mut self, value: optimal_core::Value) -> Self {
                self.core.state_mut().default = $crate::state::DefaultValue::Static(value);
                self
            }
        }

        impl $crate::criteria::Criteria for $name {
            fn core_mut(&mut self) -> &mut $crate::factory::SchemaCore {
                &mut self.core
            }
        }

        impl $crate::schema::Schema for $name {
            fn kind(&self) -> $crate::kind::Kind {
                self.core.state().kind
            }

            fn type_name(&self) -> String {
                self.core.state().type_name.clone()
            }

            fn validate_at(
                &self,
                value: Option<&optimal_core::Value>,
                path: &optimal_core::Path,
                scope: $crate::scope::Scope<'_>,
            ) -> optimal_core::ValidationResult<Option<optimal_core::Value>> {
                self.core.validate_at(value, path, scope)
            }
        }
    };
}

pub(crate) use schema_type;

mod lazy;
mod reference;
mod scalar;
mod structure;

pub use lazy::{lazy, LazySchema};
pub use reference::{custom, func, instance, CustomSchema, FunctionSchema, InstanceSchema};
pub use scalar::{boolean, date, number, string, BooleanSchema, DateSchema, NumberSchema, StringSchema};
pub use structure::{
    array, object, shape, tuple, union, ArraySchema, ObjectSchema, ShapeSchema, TupleSchema,
    UnionSchema,
};
