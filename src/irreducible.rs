//! The atoms of the algebra: `nil`, `any`, `string`, `number`, `boolean`,
//! `arr`, `obj`, `fun`. Each has no children: it either accepts a value
//! outright or produces a single error.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct Irreducible {
    name: Name,
    accepts: fn(&Value) -> bool,
}

impl Validator for Irreducible {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Irreducible
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        if (self.accepts)(value) {
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

fn make(name: &'static str, accepts: fn(&Value) -> bool) -> ValidatorRef {
    Arc::new(Irreducible {
        name: Name::new(name),
        accepts,
    })
}

/// Accepts [`Value::Nil`].
pub fn nil() -> ValidatorRef {
    make("nil", |v| matches!(v, Value::Nil))
}

/// Accepts every value.
pub fn any() -> ValidatorRef {
    make("any", |_| true)
}

/// Accepts a primitive string.
pub fn string() -> ValidatorRef {
    make("string", |v| matches!(v, Value::String(_)))
}

/// Accepts a primitive number that is finite and not NaN.
pub fn number() -> ValidatorRef {
    make("number", |v| matches!(v, Value::Number(n) if n.is_finite()))
}

/// Accepts a primitive boolean.
pub fn boolean() -> ValidatorRef {
    make("boolean", |v| matches!(v, Value::Bool(_)))
}

/// Accepts any array.
pub fn arr() -> ValidatorRef {
    make("arr", |v| matches!(v, Value::Array(_)))
}

/// Accepts any non-null, non-array record-like object.
pub fn obj() -> ValidatorRef {
    make("obj", |v| matches!(v, Value::Object(_)))
}

/// Accepts a callable: a function or a class (classes are themselves
/// callable constructors).
pub fn fun() -> ValidatorRef {
    make("fun", |v| {
        matches!(v, Value::Function(_) | Value::Class(_))
    })
}
