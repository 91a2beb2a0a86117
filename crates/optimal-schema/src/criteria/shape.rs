//! Shape criteria: a fixed set of named fields.

use optimal_core::{Map, ValidationError, Value};

use crate::schema::SchemaRef;
use crate::state::State;
use crate::validator::Validator;

/// Validate each declared field against its schema.
///
/// Every declared field is validated, defined or not, with the shape's
/// value as the sibling scope; defined results form a fresh object.
/// Undeclared keys are rejected when the shape is exact (strict mode only)
/// and otherwise carried over unmodified. A class instance is checked field
/// by field but returned as-is.
pub fn of(state: &mut State, fields: Vec<(String, SchemaRef)>) -> Option<Validator> {
    let listed = fields
        .iter()
        .map(|(name, schema)| format!("{name}: {}", schema.type_name()))
        .collect::<Vec<_>>()
        .join(", ");
    state.type_name = format!("shape<{{{listed}}}>");

    Some(Validator::transform(move |value, path, scope, state| {
        let Some(input) = value.fields() else {
            return Ok(None);
        };

        let unknown: Vec<&String> = input
            .keys()
            .filter(|key| !fields.iter().any(|(name, _)| name == *key))
            .collect();
        if state.metadata.exact && scope.is_strict() && !unknown.is_empty() {
            let names = unknown.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ");
            return Err(ValidationError::new(path, format!("Unknown fields: {names}.")));
        }

        let siblings = scope.with_current(value);
        let mut output = Map::new();
        for (name, schema) in &fields {
            if let Some(result) = schema.validate_at(input.get(name), &path.key(name), siblings)? {
                output.insert(name.clone(), result);
            }
        }

        if matches!(value, Value::Instance(_)) {
            return Ok(None);
        }
        for key in unknown {
            output.insert(key.clone(), input[key].clone());
        }
        Ok(Some(Value::Object(output)))
    }))
}

/// Reject undeclared fields.
pub fn exact(state: &mut State, exact: bool) -> Option<Validator> {
    state.metadata.exact = exact;
    None
}
