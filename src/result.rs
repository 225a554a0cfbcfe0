//! The success-or-failures sum every `validate` call returns, with the
//! map/chain/ap combinators.

use crate::error::Errors;

/// `Ok(T)` or `Err(NonEmpty[ValidationError])`.
#[derive(Clone, Debug)]
pub enum ValidationResult<T> {
    Ok(T),
    Err(Errors),
}

pub use ValidationResult::{Err as VErr, Ok as VOk};

/// `ok(x) -> Ok(x)`.
pub fn ok<T>(value: T) -> ValidationResult<T> {
    ValidationResult::Ok(value)
}

/// `err(errors) -> Err(errors)`.
pub fn err<T>(errors: Errors) -> ValidationResult<T> {
    ValidationResult::Err(errors)
}

impl<T> ValidationResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, ValidationResult::Err(_))
    }

    /// Unwraps the success value. Panics with the concatenated error
    /// descriptions on `Err` — the "programmer failure" case.
    pub fn from_ok(self) -> T {
        match self {
            ValidationResult::Ok(v) => v,
            ValidationResult::Err(errors) => panic!(
                "[runtime-validation failure]\n{}",
                errors
                    .as_slice()
                    .iter()
                    .map(|e| e.description.clone())
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Unwraps the error list. Panics on `Ok`.
    pub fn from_err(self) -> Errors {
        match self {
            ValidationResult::Err(errors) => errors,
            ValidationResult::Ok(_) => {
                panic!("[runtime-validation failure]\nfrom_err called on a successful result")
            }
        }
    }

    /// `map(r, f)`: transform the success value, pass failures through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            ValidationResult::Ok(v) => ValidationResult::Ok(f(v)),
            ValidationResult::Err(e) => ValidationResult::Err(e),
        }
    }

    /// `chain(r, f)`: sequence a further fallible step on success.
    pub fn chain<U>(self, f: impl FnOnce(T) -> ValidationResult<U>) -> ValidationResult<U> {
        match self {
            ValidationResult::Ok(v) => f(v),
            ValidationResult::Err(e) => ValidationResult::Err(e),
        }
    }

    /// Standard applicative `ap`. Not used internally by the algebra, but
    /// exposed for composing fallible transformations.
    pub fn ap<U>(self, rf: ValidationResult<impl FnOnce(T) -> U>) -> ValidationResult<U> {
        match (rf, self) {
            (ValidationResult::Ok(f), ValidationResult::Ok(v)) => ValidationResult::Ok(f(v)),
            (ValidationResult::Err(e), ValidationResult::Ok(_)) => ValidationResult::Err(e),
            (ValidationResult::Ok(_), ValidationResult::Err(e)) => ValidationResult::Err(e),
            (ValidationResult::Err(ef), ValidationResult::Err(ev)) => {
                ValidationResult::Err(ef.merge(ev))
            }
        }
    }
}
