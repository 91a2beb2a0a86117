//! Union resolution.
//!
//! Members are tried in declaration order, but only those whose kind can
//! hold the input's category: arrays go to array and tuple members, plain
//! objects to object and shape members, instances to instance and shape
//! members, and custom members see everything. The first member that
//! accepts the value wins. When none does, every candidate failure is
//! folded into one aggregate error.

use optimal_core::{type_of, ValidationError, Value};

use crate::kind::Kind;
use crate::schema::SchemaRef;
use crate::state::State;
use crate::validator::Validator;

const NESTED: &str = "Nested unions are not supported.";

/// Accept a value matching any of `members`; tag becomes `a | b`.
///
/// # Panics
///
/// When `members` is empty or contains a union.
#[track_caller]
pub fn of(state: &mut State, members: Vec<SchemaRef>) -> Option<Validator> {
    assert!(!members.is_empty(), "union() requires at least one member schema");
    assert!(
        members.iter().all(|member| member.kind() != Kind::Union),
        "{NESTED}"
    );
    let tags: Vec<String> = members.iter().map(|member| member.type_name()).collect();
    state.type_name = tags.join(" | ");
    let names = tags.join(", ");

    Some(Validator::transform(move |value, path, scope, _| {
        let category = value.category();
        let mut causes = Vec::new();

        for member in &members {
            let kind = member.resolved_kind();
            if kind == Kind::Union {
                return Err(ValidationError::new(path, NESTED));
            }
            if !kind.accepts(category) {
                continue;
            }
            match member.validate_at(Some(value), path, scope) {
                Ok(result) => return Ok(Some(result.unwrap_or_else(|| value.clone()))),
                Err(err) => {
                    tracing::debug!(
                        path = %path,
                        candidate = %member.type_name(),
                        "union candidate rejected: {}",
                        err.reason()
                    );
                    causes.push(err);
                }
            }
        }

        if !scope.is_strict() {
            return Ok(None);
        }

        let mut reason = format!("Value must be one of: {names}. Received {}", type_of(value));
        if causes.is_empty() {
            reason.push('.');
        } else {
            reason.push_str(" with the following invalidations:");
            for cause in &causes {
                reason.push_str("\n - ");
                reason.push_str(&cause.message());
            }
        }
        Err(ValidationError::aggregate(path, reason, causes))
    }))
}
