//! `array(T, name?)` — validates every element against `T`, collecting all
//! failures rather than stopping at the first one.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct ArrayValidator {
    name: Name,
    element: ValidatorRef,
}

impl Validator for ArrayValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let Value::Array(items) = value else {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        };

        let mut accumulator = ErrorAccumulator::new();
        for (idx, item) in items.iter().enumerate() {
            let item_ctx = ctx.descend(idx.to_string(), self.element.name());
            if let ValidationResult::Err(errors) = self.element.validate(item, &item_ctx) {
                accumulator.extend(errors);
            }
        }

        match accumulator.into_errors() {
            Some(errors) => result::err(errors),
            None => result::ok(value.clone()),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn array(element: ValidatorRef, name: Option<String>) -> ValidatorRef {
    let default_name = format!("Array<{}>", element.name());
    Arc::new(ArrayValidator {
        name: Name::new(name.unwrap_or(default_name)),
        element,
    })
}
