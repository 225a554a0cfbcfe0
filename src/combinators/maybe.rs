//! `maybe(T, name?)` — accepts `Nil` as-is, or defers to `T`.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct MaybeValidator {
    name: Name,
    inner: ValidatorRef,
}

impl Validator for MaybeValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Maybe
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        if value.is_nil() {
            result::ok(value.clone())
        } else {
            self.inner.validate(value, ctx)
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn maybe(inner: ValidatorRef, name: Option<String>) -> ValidatorRef {
    let default_name = format!("?{}", inner.name());
    Arc::new(MaybeValidator {
        name: Name::new(name.unwrap_or(default_name)),
        inner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irreducible::number;

    #[test]
    fn accepts_nil_without_deferring_to_inner() {
        let t = maybe(number(), None);
        let ctx = Context::root(t.name());
        assert!(t.validate(&Value::Nil, &ctx).is_ok());
    }

    #[test]
    fn defers_to_inner_for_non_nil_values() {
        let t = maybe(number(), None);
        let ctx = Context::root(t.name());
        assert!(t.validate(&Value::Number(1.0), &ctx).is_ok());
        assert!(t.validate(&Value::String("x".into()), &ctx).is_err());
    }

    #[test]
    fn default_name_is_question_mark_prefixed() {
        assert_eq!(maybe(number(), None).name().as_ref(), "?number");
    }
}
