//! Per-call validation context threaded through every nested call.

use optimal_core::{Mode, Value};

/// What a validator can see besides its own value.
///
/// `current` is the object whose field is being validated (the sibling view
/// used by `and`/`or`/`xor`/`custom`), `root` is the outermost input, and
/// `mode` selects strict or lenient checking. Shape validation replaces
/// `current` for its fields; collections and tuples pass the scope through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scope<'a> {
    /// Object currently being validated.
    pub current: Option<&'a Value>,
    /// Outermost input object.
    pub root: Option<&'a Value>,
    /// Validation mode.
    pub mode: Mode,
}

impl<'a> Scope<'a> {
    /// Empty scope in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            current: None,
            root: None,
            mode,
        }
    }

    /// Empty strict scope.
    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    /// Empty lenient scope.
    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }

    /// Scope for a top-level object: it is both the current and the root
    /// object.
    pub fn root_of(value: &'a Value, mode: Mode) -> Self {
        Self {
            current: Some(value),
            root: Some(value),
            mode,
        }
    }

    /// Same scope with a new current object.
    pub fn with_current<'b>(&self, current: &'b Value) -> Scope<'b>
    where
        'a: 'b,
    {
        Scope {
            current: Some(current),
            root: self.root,
            mode: self.mode,
        }
    }

    /// Returns true in strict mode.
    pub fn is_strict(&self) -> bool {
        self.mode.is_strict()
    }
}

impl Default for Scope<'_> {
    fn default() -> Self {
        Self::strict()
    }
}
