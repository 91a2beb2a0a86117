//! Boolean criteria.

use optimal_core::invariant;

use crate::state::State;
use crate::validator::Validator;

fn only(expected: bool, message: &'static str) -> Option<Validator> {
    Some(Validator::check(move |value, path, _| {
        let ok = value.as_bool().map_or(true, |b| b == expected);
        invariant(ok, path, message)
    }))
}

/// Accept only `true`.
pub fn only_true(_state: &mut State) -> Option<Validator> {
    only(true, "May only be true.")
}

/// Accept only `false`.
pub fn only_false(_state: &mut State) -> Option<Validator> {
    only(false, "May only be false.")
}
