//! `tuple([T0, .., Tn-1], name?)` — positional validation. Excess elements
//! are never inspected; missing elements are validated as `Value::Nil`, so
//! whether a short tuple is an error depends entirely on the corresponding
//! child validator.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct TupleValidator {
    name: Name,
    elements: Vec<ValidatorRef>,
}

impl Validator for TupleValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Tuple
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let Value::Array(items) = value else {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        };

        let mut accumulator = ErrorAccumulator::new();
        for (idx, element) in self.elements.iter().enumerate() {
            let item = items.get(idx).cloned().unwrap_or(Value::Nil);
            let item_ctx = ctx.descend(idx.to_string(), element.name());
            if let ValidationResult::Err(errors) = element.validate(&item, &item_ctx) {
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

pub fn tuple(elements: Vec<ValidatorRef>, name: Option<String>) -> ValidatorRef {
    let default_name = format!(
        "[{}]",
        elements
            .iter()
            .map(|e| e.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Arc::new(TupleValidator {
        name: Name::new(name.unwrap_or(default_name)),
        elements,
    })
}
