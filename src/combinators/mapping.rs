//! `mapping(Kt, Vt, name?)` — validates every own key against `Kt` and every
//! own value against `Vt`.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct MappingValidator {
    name: Name,
    key_type: ValidatorRef,
    value_type: ValidatorRef,
}

impl Validator for MappingValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Mapping
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let Value::Object(entries) = value else {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        };

        let mut accumulator = ErrorAccumulator::new();
        for (key, entry_value) in entries.iter() {
            let key_ctx = ctx.descend(key.clone(), self.key_type.name());
            if let ValidationResult::Err(errors) =
                self.key_type.validate(&Value::string(key.clone()), &key_ctx)
            {
                accumulator.extend(errors);
            }

            let value_ctx = ctx.descend(key.clone(), self.value_type.name());
            if let ValidationResult::Err(errors) = self.value_type.validate(entry_value, &value_ctx)
            {
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

pub fn mapping(key_type: ValidatorRef, value_type: ValidatorRef, name: Option<String>) -> ValidatorRef {
    let default_name = format!("{{ [key: {}]: {} }}", key_type.name(), value_type.name());
    Arc::new(MappingValidator {
        name: Name::new(name.unwrap_or(default_name)),
        key_type,
        value_type,
    })
}
