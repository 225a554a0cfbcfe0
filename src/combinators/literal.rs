//! `literal({value: v})` — accepts only values strictly equal to `v`.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

/// The literal values `literal` accepts: string, number, or boolean.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Literal {
    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Str(s), Value::String(v)) => s == v,
            (Literal::Num(n), Value::Number(v)) => n == v,
            (Literal::Bool(b), Value::Bool(v)) => b == v,
            _ => false,
        }
    }

    /// `name = JSON.stringify(v)`.
    fn default_name(&self) -> String {
        match self {
            Literal::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            Literal::Num(n) if n.fract() == 0.0 && n.is_finite() => format!("{n:.0}"),
            Literal::Num(n) => serde_json::Number::from_f64(*n)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "null".to_string()),
            Literal::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Num(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

struct LiteralValidator {
    name: Name,
    expected: Literal,
}

impl Validator for LiteralValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Literal
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        if self.expected.matches(value) {
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

pub fn literal(expected: impl Into<Literal>) -> ValidatorRef {
    let expected = expected.into();
    let name = expected.default_name();
    Arc::new(LiteralValidator {
        name: Name::new(name),
        expected,
    })
}
