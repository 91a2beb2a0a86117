//! Tuple criteria: fixed positional members.

use optimal_core::{ValidationError, Value};

use crate::schema::SchemaRef;
use crate::state::State;
use crate::validator::Validator;

/// Validate each position against its schema, producing an array of
/// exactly `items.len()` elements. Missing trailing positions resolve to
/// their schema's default.
pub fn of(state: &mut State, items: Vec<SchemaRef>) -> Option<Validator> {
    let listed = items
        .iter()
        .map(|schema| schema.type_name())
        .collect::<Vec<_>>()
        .join(", ");
    state.type_name = format!("tuple<{listed}>");

    Some(Validator::transform(move |value, path, scope, _| {
        let Some(input) = value.as_array() else {
            return Ok(None);
        };
        if scope.is_strict() && input.len() > items.len() {
            return Err(ValidationError::new(
                path,
                format!("Value must be a tuple with at most {} items.", items.len()),
            ));
        }
        let output = items
            .iter()
            .enumerate()
            .map(|(i, schema)| {
                schema
                    .validate_at(input.get(i), &path.index(i), scope)
                    .map(|result| result.unwrap_or(Value::Null))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Value::Array(output)))
    }))
}
