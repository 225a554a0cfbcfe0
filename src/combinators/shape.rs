//! `$shape(objectType, name?)` — like `object`, but a declared property that
//! is absent from the value is simply skipped rather than failed, plus the
//! `$exact`-style extra-key check.

use std::any::Any;
use std::sync::Arc;

use crate::combinators::object::ObjectValidator;
use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct ShapeValidator {
    name: Name,
    object_type: ValidatorRef,
}

impl Validator for ShapeValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Shape
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let Value::Object(entries) = value else {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        };

        let declared = self
            .object_type
            .as_any()
            .downcast_ref::<ObjectValidator>()
            .expect("$shape requires an object-kind validator");

        let mut accumulator = ErrorAccumulator::new();
        for (key, validator) in declared.props() {
            let present = entries.iter().any(|(k, _)| k == key);
            if !present {
                continue;
            }
            let prop_value = value.get(key);
            let prop_ctx = ctx.descend(key.clone(), validator.name());
            if let ValidationResult::Err(errors) = validator.validate(&prop_value, &prop_ctx) {
                accumulator.extend(errors);
            }
        }

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

pub fn shape(object_type: ValidatorRef, name: Option<String>) -> ValidatorRef {
    assert!(
        object_type.as_any().downcast_ref::<ObjectValidator>().is_some(),
        "$shape requires an object-kind validator"
    );
    let default_name = format!("$Shape<{}>", object_type.name());
    Arc::new(ShapeValidator {
        name: Name::new(name.unwrap_or(default_name)),
        object_type,
    })
}
