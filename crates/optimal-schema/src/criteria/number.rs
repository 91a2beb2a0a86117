//! Numeric criteria. Every check is skipped for an optional field still at
//! its default, so `number().positive()` does not reject an unset field.

use optimal_core::{invariant, Value};

use crate::state::State;
use crate::validator::Validator;

fn number_check<F>(message: String, accept: F) -> Option<Validator>
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    Some(
        Validator::check(move |value, path, _| {
            let ok = value.as_f64().map_or(true, &accept);
            invariant(ok, path, message.as_str())
        })
        .skip_if_optional(),
    )
}

/// Strictly between `min` and `max`.
///
/// # Panics
///
/// When `min > max`.
#[track_caller]
pub fn between(_state: &mut State, min: f64, max: f64) -> Option<Validator> {
    assert!(min <= max, "between() requires min <= max, got {min} and {max}");
    number_check(format!("Number must be between {min} and {max}."), move |n| {
        n > min && n < max
    })
}

/// Between `min` and `max`, both included.
///
/// # Panics
///
/// When `min > max`.
#[track_caller]
pub fn between_inclusive(_state: &mut State, min: f64, max: f64) -> Option<Validator> {
    assert!(min <= max, "between() requires min <= max, got {min} and {max}");
    number_check(
        format!("Number must be between {min} and {max} inclusive."),
        move |n| n >= min && n <= max,
    )
}

/// Greater than `min`.
pub fn gt(_state: &mut State, min: f64) -> Option<Validator> {
    number_check(format!("Number must be greater than {min}."), move |n| n > min)
}

/// Greater than or equal to `min`.
pub fn gte(_state: &mut State, min: f64) -> Option<Validator> {
    number_check(
        format!("Number must be greater than or equal to {min}."),
        move |n| n >= min,
    )
}

/// Less than `max`.
pub fn lt(_state: &mut State, max: f64) -> Option<Validator> {
    number_check(format!("Number must be less than {max}."), move |n| n < max)
}

/// Less than or equal to `max`.
pub fn lte(_state: &mut State, max: f64) -> Option<Validator> {
    number_check(
        format!("Number must be less than or equal to {max}."),
        move |n| n <= max,
    )
}

/// Whole number.
pub fn int(_state: &mut State) -> Option<Validator> {
    number_check("Number must be an integer.".into(), |n| n.fract() == 0.0)
}

/// Number with a fractional part.
pub fn float(_state: &mut State) -> Option<Validator> {
    number_check("Number must be a float.".into(), |n| n.fract() != 0.0)
}

/// Greater than zero.
pub fn positive(_state: &mut State) -> Option<Validator> {
    number_check("Number must be positive.".into(), |n| n > 0.0)
}

/// Less than zero.
pub fn negative(_state: &mut State) -> Option<Validator> {
    number_check("Number must be negative.".into(), |n| n < 0.0)
}

/// One of a fixed list.
///
/// # Panics
///
/// When `list` is empty.
#[track_caller]
pub fn one_of(_state: &mut State, list: Vec<f64>) -> Option<Validator> {
    assert!(!list.is_empty(), "one_of() requires a non-empty list of numbers");
    let rendered = list
        .iter()
        .map(|n| Value::Number(*n).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    number_check(format!("Number must be one of: {rendered}."), move |n| {
        list.contains(&n)
    })
}
