//! Array and object criteria.
//!
//! `array_of`/`object_of` rebuild the collection from each member's
//! validated result, so nested defaults and casts land in the output.
//! The sizing checks are not skipped for optional fields: an empty
//! default fails `not_empty`.

use optimal_core::{invariant, Map, Value};

use crate::schema::SchemaRef;
use crate::state::State;
use crate::validator::Validator;

/// Validate every element against `element`; tag becomes `array<T>`.
pub fn array_of(state: &mut State, element: SchemaRef) -> Option<Validator> {
    state.type_name = format!("array<{}>", element.type_name());
    Some(Validator::transform(move |value, path, scope, _| {
        let Some(items) = value.as_array() else {
            return Ok(None);
        };
        let rebuilt = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                element
                    .validate_at(Some(item), &path.index(i), scope)
                    .map(|result| result.unwrap_or_else(|| item.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Value::Array(rebuilt)))
    }))
}

/// Reject empty arrays.
pub fn array_not_empty(_state: &mut State) -> Option<Validator> {
    Some(Validator::check(|value, path, _| {
        let ok = value.as_array().map_or(true, |items| !items.is_empty());
        invariant(ok, path, "Array cannot be empty.")
    }))
}

/// Exactly `size` elements.
pub fn array_size_of(_state: &mut State, size: usize) -> Option<Validator> {
    Some(Validator::check(move |value, path, _| {
        let ok = value.as_array().map_or(true, |items| items.len() == size);
        invariant(ok, path, format!("Array length must be {size}."))
    }))
}

/// Validate every value against `schema`; tag becomes `object<T>`.
pub fn object_of(state: &mut State, schema: SchemaRef) -> Option<Validator> {
    state.type_name = format!("object<{}>", schema.type_name());
    Some(Validator::transform(move |value, path, scope, _| {
        let Some(entries) = value.as_object() else {
            return Ok(None);
        };
        let mut rebuilt = Map::new();
        for (key, item) in entries {
            let result = schema.validate_at(Some(item), &path.key(key), scope)?;
            rebuilt.insert(key.clone(), result.unwrap_or_else(|| item.clone()));
        }
        Ok(Some(Value::Object(rebuilt)))
    }))
}

/// Validate every key as a string against `key`.
pub fn keys_of(_state: &mut State, key: SchemaRef) -> Option<Validator> {
    Some(Validator::check(move |value, path, scope| {
        if let Some(entries) = value.as_object() {
            for name in entries.keys() {
                key.validate_at(Some(&Value::from(name.as_str())), &path.key(name), scope)?;
            }
        }
        Ok(())
    }))
}

/// Reject objects without properties.
pub fn object_not_empty(_state: &mut State) -> Option<Validator> {
    Some(Validator::check(|value, path, _| {
        let ok = value.as_object().map_or(true, |entries| !entries.is_empty());
        invariant(ok, path, "Object cannot be empty.")
    }))
}

/// Exactly `size` properties.
pub fn object_size_of(_state: &mut State, size: usize) -> Option<Validator> {
    Some(Validator::check(move |value, path, _| {
        let ok = value.as_object().map_or(true, |entries| entries.len() == size);
        invariant(ok, path, format!("Object must have {size} properties."))
    }))
}
