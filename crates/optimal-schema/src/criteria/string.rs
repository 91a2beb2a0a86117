//! String criteria.
//!
//! Content checks are skipped for an optional field still at its default,
//! so `string().contains("@")` accepts an unset field. The case formats are
//! patterns layered on [`matches`].

use std::sync::OnceLock;

use optimal_core::{invariant, ValidationError, Value};
use regex::Regex;

use crate::state::State;
use crate::validator::Validator;

fn string_check<F>(message: String, accept: F) -> Option<Validator>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Some(
        Validator::check(move |value, path, _| {
            let ok = value.as_str().map_or(true, &accept);
            invariant(ok, path, message.as_str())
        })
        .skip_if_optional(),
    )
}

/// Contains `token`.
pub fn contains(_state: &mut State, token: impl Into<String>) -> Option<Validator> {
    let token = token.into();
    let message = format!("String does not include \"{token}\".");
    string_check(message, move |s| s.contains(token.as_str()))
}

/// Matches `pattern`. `message` replaces the default failure reason.
pub fn matches(_state: &mut State, pattern: Regex, message: Option<String>) -> Option<Validator> {
    let message =
        message.unwrap_or_else(|| format!("String does not match pattern \"{}\".", pattern.as_str()));
    Some(
        Validator::check(move |value, path, _| match value.as_str() {
            Some(s) if !pattern.is_match(s) => Err(ValidationError::new(path, message.as_str())),
            _ => Ok(()),
        })
        .skip_if_optional(),
    )
}

static CAMEL: OnceLock<Regex> = OnceLock::new();
static KEBAB: OnceLock<Regex> = OnceLock::new();
static PASCAL: OnceLock<Regex> = OnceLock::new();
static SNAKE: OnceLock<Regex> = OnceLock::new();

fn case_pattern(cell: &'static OnceLock<Regex>, pattern: &str) -> Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("case pattern is a valid regex"))
        .clone()
}

/// `camelCase`.
pub fn camel_case(state: &mut State) -> Option<Validator> {
    let pattern = case_pattern(&CAMEL, r"^[a-z][0-9A-Za-z]*$");
    matches(state, pattern, Some("String must be in camel case.".into()))
}

/// `kebab-case`.
pub fn kebab_case(state: &mut State) -> Option<Validator> {
    let pattern = case_pattern(&KEBAB, r"^[a-z][0-9a-z]*(-[0-9a-z]+)*$");
    matches(state, pattern, Some("String must be in kebab case.".into()))
}

/// `PascalCase`.
pub fn pascal_case(state: &mut State) -> Option<Validator> {
    let pattern = case_pattern(&PASCAL, r"^[A-Z][0-9A-Za-z]*$");
    matches(state, pattern, Some("String must be in pascal case.".into()))
}

/// `snake_case`.
pub fn snake_case(state: &mut State) -> Option<Validator> {
    let pattern = case_pattern(&SNAKE, r"^[a-z][0-9a-z]*(_[0-9a-z]+)*$");
    matches(state, pattern, Some("String must be in snake case.".into()))
}

/// No uppercase characters.
pub fn lower_case(_state: &mut State) -> Option<Validator> {
    string_check("String must be lower cased.".into(), |s| s.to_lowercase() == s)
}

/// No lowercase characters.
pub fn upper_case(_state: &mut State) -> Option<Validator> {
    string_check("String must be upper cased.".into(), |s| s.to_uppercase() == s)
}

/// Rejects the empty string. Applies even to an optional field at its
/// default.
pub fn not_empty(_state: &mut State) -> Option<Validator> {
    Some(Validator::check(|value, path, _| {
        let ok = value.as_str().map_or(true, |s| !s.is_empty());
        invariant(ok, path, "String cannot be empty.")
    }))
}

/// One of a fixed list.
///
/// # Panics
///
/// When `list` is empty.
#[track_caller]
pub fn one_of<I, S>(_state: &mut State, list: I) -> Option<Validator>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let list: Vec<String> = list.into_iter().map(Into::into).collect();
    assert!(!list.is_empty(), "one_of() requires a non-empty list of strings");
    let message = format!("String must be one of: {}.", list.join(", "));
    string_check(message, move |s| list.iter().any(|choice| choice == s))
}

/// Exactly `size` characters long.
pub fn size_of(_state: &mut State, size: usize) -> Option<Validator> {
    string_check(format!("String length must be {size}."), move |s| {
        s.chars().count() == size
    })
}
