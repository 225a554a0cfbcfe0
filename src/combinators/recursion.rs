//! `recursion(name, defineFn)` — builds a self-referential validator tree.
//!
//! A placeholder is handed to `defineFn`; it forwards every call to the
//! concrete validator `defineFn` eventually produces, which is back-patched
//! into the placeholder's `OnceLock` exactly once, before anything outside
//! this function observes it.

use std::any::Any;
use std::sync::{Arc, OnceLock, Weak};

use crate::context::Context;
use crate::result::ValidationResult;
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct Placeholder {
    name: Name,
    resolved: OnceLock<Weak<dyn Validator>>,
}

impl Placeholder {
    fn target(&self) -> ValidatorRef {
        self.resolved
            .get()
            .expect("recursive validator invoked before its definition completed")
            .upgrade()
            .expect("recursive validator dropped while still in use")
    }
}

impl Validator for Placeholder {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        self.target().kind()
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        self.target().validate(value, ctx)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn recursion(
    name: impl Into<String>,
    define: impl FnOnce(ValidatorRef) -> ValidatorRef,
) -> ValidatorRef {
    let name = name.into();
    let placeholder = Arc::new(Placeholder {
        name: Name::new(name.clone()),
        resolved: OnceLock::new(),
    });
    let self_ref: ValidatorRef = placeholder.clone();

    let result = define(self_ref);
    placeholder
        .resolved
        .set(Arc::downgrade(&result))
        .ok()
        .expect("recursion's placeholder must be resolved exactly once");
    result.rename(&name, RenameToken::new());
    result
}
