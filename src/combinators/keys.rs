//! `$keys(objectType, name?)` — accepts a string that names one of
//! `objectType`'s declared properties. Introspects the object validator via
//! `as_any` downcasting, mirroring how `$keys`/`$exact`/`$shape` in the
//! combinator algebra all read another validator's declared shape rather
//! than re-deriving it.

use std::any::Any;
use std::sync::Arc;

use crate::combinators::object::ObjectValidator;
use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct KeysValidator {
    name: Name,
    object_type: ValidatorRef,
}

impl Validator for KeysValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Keys
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let object = self
            .object_type
            .as_any()
            .downcast_ref::<ObjectValidator>()
            .expect("$keys requires an object-kind validator");

        let accepted = matches!(value, Value::String(s) if object.has_property(s));
        if accepted {
            result::ok(value.clone())
        } else {
            result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )))
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn keys(object_type: ValidatorRef, name: Option<String>) -> ValidatorRef {
    assert!(
        object_type.as_any().downcast_ref::<ObjectValidator>().is_some(),
        "$keys requires an object-kind validator"
    );
    let default_name = format!("$Keys<{}>", object_type.name());
    Arc::new(KeysValidator {
        name: Name::new(name.unwrap_or(default_name)),
        object_type,
    })
}
