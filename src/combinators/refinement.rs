//! `refinement(T, predicate, name?)` — validate with `T`, then further narrow
//! by a runtime predicate: a thin wrapper around a single child validator.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

/// A named predicate. Reporter compatibility requires
/// an anonymous predicate's default name to be the literal `<function1>` —
/// Rust closures have no runtime arity to reflect on, so this is a fixed
/// default rather than real arity introspection.
pub struct Predicate {
    name: String,
    f: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Predicate {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    pub fn anonymous(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::new("<function1>", f)
    }

    fn call(&self, value: &Value) -> bool {
        (self.f)(value)
    }
}

impl Clone for Predicate {
    fn clone(&self) -> Self {
        Predicate {
            name: self.name.clone(),
            f: self.f.clone(),
        }
    }
}

struct RefinementValidator {
    name: Name,
    inner: ValidatorRef,
    predicate: Predicate,
}

impl Validator for RefinementValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Refinement
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        match self.inner.validate(value, ctx) {
            ValidationResult::Err(_) => result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            ))),
            ValidationResult::Ok(narrowed) => {
                if self.predicate.call(&narrowed) {
                    result::ok(narrowed)
                } else {
                    result::err(Errors::single(ValidationError::new(
                        value.clone(),
                        ctx.clone(),
                    )))
                }
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn refinement(inner: ValidatorRef, predicate: Predicate, name: Option<String>) -> ValidatorRef {
    let default_name = format!("({} | {})", inner.name(), predicate.name);
    Arc::new(RefinementValidator {
        name: Name::new(name.unwrap_or(default_name)),
        inner,
        predicate,
    })
}
