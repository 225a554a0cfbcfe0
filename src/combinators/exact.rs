//! `$exact(props, name?)` — like `object(props)`, plus one error per extra
//! key found on the value, each reported at context `{extraKey, "nil"}`.

use std::any::Any;
use std::sync::Arc;

use crate::combinators::object::{default_object_name, ObjectValidator};
use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct ExactValidator {
    name: Name,
    object: ValidatorRef,
}

impl Validator for ExactValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Exact
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let Value::Object(entries) = value else {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        };

        let mut accumulator = ErrorAccumulator::new();
        if let ValidationResult::Err(errors) = self.object.validate(value, ctx) {
            accumulator.extend(errors);
        }

        let declared = self
            .object
            .as_any()
            .downcast_ref::<ObjectValidator>()
            .expect("$exact requires an object-kind inner validator");
        for (key, _) in entries.iter() {
            if !declared.has_property(key) {
                let extra_ctx = ctx.descend(key.clone(), "nil");
                accumulator.push(ValidationError::new(Value::Nil, extra_ctx));
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

pub fn exact(props: Vec<(String, ValidatorRef)>, name: Option<String>) -> ValidatorRef {
    let default_name = format!("$Exact<{}>", default_object_name(&props));
    let object = crate::combinators::object::object(props, None);
    Arc::new(ExactValidator {
        name: Name::new(name.unwrap_or(default_name)),
        object,
    })
}
