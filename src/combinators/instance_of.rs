//! `instanceOf(Ctor, name?)` — accepts `v` iff `v` is an instance of `Ctor`.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::{Class, Value};

struct InstanceOfValidator {
    name: Name,
    class: Arc<Class>,
}

impl Validator for InstanceOfValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::InstanceOf
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let accepted = matches!(value, Value::Instance(c) if c.is_or_extends(&self.class));
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

/// Default `name = Ctor.displayName || Ctor.name || "<function0>"`: this
/// crate's `Class` always carries a name, so the fallback is unreachable in
/// practice but kept for parity with the fallback rule.
pub fn instance_of(class: Arc<Class>, name: Option<String>) -> ValidatorRef {
    let default_name = if class.name.is_empty() {
        "<function0>".to_string()
    } else {
        class.name.clone()
    };
    Arc::new(InstanceOfValidator {
        name: Name::new(name.unwrap_or(default_name)),
        class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_instance_of_exact_class_and_subclass() {
        let animal = Arc::new(Class::new("Animal"));
        let dog_class = Arc::new(Class::extending("Dog", &animal));
        let t = instance_of(animal.clone(), None);
        let ctx = Context::root(t.name());

        assert!(t
            .validate(&Value::Instance(animal.clone()), &ctx)
            .is_ok());
        assert!(t.validate(&Value::Instance(dog_class), &ctx).is_ok());
    }

    #[test]
    fn rejects_unrelated_class_and_non_instance_values() {
        let animal = Arc::new(Class::new("Animal"));
        let rock = Arc::new(Class::new("Rock"));
        let t = instance_of(animal, None);
        let ctx = Context::root(t.name());

        assert!(t.validate(&Value::Instance(rock), &ctx).is_err());
        assert!(t.validate(&Value::Nil, &ctx).is_err());
    }
}
