//! # Error Types
//!
//! Every validation failure is reported through one structured record,
//! [`ValidationError`]. It keeps the failing [`Path`], the human-readable
//! reason, and optional diagnostic context (schema name, source file)
//! as separate fields and only assembles them into a message in `Display`.
//!
//! ## Message format
//!
//! - base: `Invalid field "<path>". <reason>`, or just `<reason>` at the root
//! - with a schema name: `<name>: <base>`
//! - with a file: `<base> (in <file>)`

use std::fmt;

use thiserror::Error;

use crate::path::Path;
use crate::value::Category;

/// Result alias used by every validation step.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Diagnostic labels attached at the blueprint boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Schema label, e.g. the name of the options object being validated.
    pub schema: Option<String>,
    /// Source label, e.g. the config file the input was loaded from.
    pub file: Option<String>,
}

impl ErrorContext {
    /// Returns true when neither label is set.
    pub fn is_empty(&self) -> bool {
        self.schema.is_none() && self.file.is_none()
    }
}

/// A value failed a type check, a criterion, or a cross-field constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    path: Path,
    reason: String,
    context: ErrorContext,
    causes: Vec<ValidationError>,
}

impl ValidationError {
    /// Create an error at `path`.
    pub fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.clone(),
            reason: reason.into(),
            context: ErrorContext::default(),
            causes: Vec::new(),
        }
    }

    /// Create an error that summarizes several underlying failures, such as
    /// every rejected union candidate.
    pub fn aggregate(path: &Path, reason: impl Into<String>, causes: Vec<ValidationError>) -> Self {
        Self {
            causes,
            ..Self::new(path, reason)
        }
    }

    /// Attach schema/file labels.
    ///
    /// An error that already carries context is returned unchanged, so
    /// re-wrapping at nested blueprint boundaries keeps the innermost labels.
    pub fn with_context(mut self, context: &ErrorContext) -> Self {
        if self.context.is_empty() {
            self.context = context.clone();
        }
        self
    }

    /// Location of the failing value.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the value was rejected, without any path or context prefix.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Schema label, if attached.
    pub fn schema(&self) -> Option<&str> {
        self.context.schema.as_deref()
    }

    /// File label, if attached.
    pub fn file(&self) -> Option<&str> {
        self.context.file.as_deref()
    }

    /// Attached diagnostic context.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Underlying failures for aggregate errors. Empty otherwise.
    pub fn causes(&self) -> &[ValidationError] {
        &self.causes
    }

    /// Path-qualified message without schema/file labels.
    pub fn message(&self) -> String {
        if self.path.is_root() {
            self.reason.clone()
        } else {
            format!("Invalid field \"{}\". {}", self.path, self.reason)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.context.schema {
            write!(f, "{schema}: ")?;
        }
        f.write_str(&self.message())?;
        if let Some(file) = &self.context.file {
            write!(f, " (in {file})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A [`Value`](crate::Value) could not be converted to JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Instances and functions have no JSON form.
    #[error("{0} values have no JSON representation")]
    Unrepresentable(Category),

    /// NaN and infinities have no JSON form.
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}
