//! `ValidationError`: the domain-failure value every rejected `validate` call
//! produces, and the one non-empty list type ([`Errors`]) they're carried in.

use std::fmt;

use crate::context::Context;
use crate::value::{stringify, Value};

/// `{ value, context, description }`: the offending value, the path at which
/// it was rejected, and the canonical human-readable description.
#[derive(Clone, Debug)]
pub struct ValidationError {
    pub value: Value,
    pub context: Context,
    pub description: String,
}

impl ValidationError {
    /// Builds the canonical
    /// `"Invalid value <stringify(value)> supplied to <contextPath(context)>"`
    /// description.
    pub fn new(value: Value, context: Context) -> Self {
        let description = format!("Invalid value {} supplied to {}", stringify(&value), context);
        ValidationError {
            value,
            context,
            description,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A non-empty list of [`ValidationError`]. Constructing one from an empty
/// `Vec` is a programmer error — see [`crate::api::crash`].
#[derive(Clone, Debug)]
pub struct Errors(Vec<ValidationError>);

impl Errors {
    /// Wraps `errors` as a non-empty error list. Panics if `errors` is empty.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        assert!(
            !errors.is_empty(),
            "[runtime-validation failure]\nErrors::new called with an empty list"
        );
        Errors(errors)
    }

    /// A single-error list, the shape `union`/`refinement` collapse to.
    pub fn single(error: ValidationError) -> Self {
        Errors(vec![error])
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Concatenates two non-empty error lists — used by composites that
    /// accumulate failures from more than one child.
    pub fn merge(mut self, other: Errors) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl IntoIterator for Errors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Accumulates failures from composite validation: collects every `Err`
/// produced by children instead of short-circuiting on the first one.
#[derive(Default)]
pub(crate) struct ErrorAccumulator(Vec<ValidationError>);

impl ErrorAccumulator {
    pub(crate) fn new() -> Self {
        ErrorAccumulator(Vec::new())
    }

    pub(crate) fn extend(&mut self, errors: Errors) {
        self.0.extend(errors.into_vec());
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub(crate) fn into_errors(self) -> Option<Errors> {
        if self.0.is_empty() {
            None
        } else {
            Some(Errors(self.0))
        }
    }
}
