//! Class instance criteria.

use optimal_core::{invariant, Class};

use crate::state::State;
use crate::validator::Validator;

/// Require an instance of `class` (or a subclass). With `loose`, a class
/// of the same name anywhere in the chain also matches. The tag becomes the
/// class name.
pub fn of(state: &mut State, class: &Class, loose: bool) -> Option<Validator> {
    state.type_name = class.name().to_string();
    let class = class.clone();
    Some(Validator::check(move |value, path, _| {
        let ok = value
            .as_instance()
            .is_some_and(|instance| instance.is_instance_of(&class, loose));
        invariant(ok, path, format!("Must be an instance of \"{}\".", class.name()))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::scope::Scope;
    use optimal_core::{Instance, Map, Path, Value};

    #[test]
    fn accepts_subclasses() {
        let base = Class::new("Base");
        let child = Class::extends("Child", &base);
        let mut state = State::new(Kind::Instance);
        let validator = of(&mut state, &base, false).unwrap();
        assert_eq!(state.type_name, "Base");

        let value = Value::from(Instance::new(&child, Map::new()));
        assert!(validator.run(&value, &Path::root(), Scope::strict(), &state).is_ok());
    }

    #[test]
    fn loose_matching_compares_names() {
        let original = Class::new("Plugin");
        let copy = Class::new("Plugin");
        let value = Value::from(Instance::new(&copy, Map::new()));

        let mut state = State::new(Kind::Instance);
        let strict = of(&mut state, &original, false).unwrap();
        let err = strict
            .run(&value, &Path::root(), Scope::strict(), &state)
            .unwrap_err();
        assert_eq!(err.reason(), "Must be an instance of \"Plugin\".");

        let loose = of(&mut state, &original, true).unwrap();
        assert!(loose.run(&value, &Path::root(), Scope::strict(), &state).is_ok());
    }
}
