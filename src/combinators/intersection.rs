//! `intersection([T0, ..], name?)` — validate against every member,
//! accumulating failures; return the original value on overall success.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::ErrorAccumulator;
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct IntersectionValidator {
    name: Name,
    members: Vec<ValidatorRef>,
}

impl Validator for IntersectionValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Intersection
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        let mut accumulator = ErrorAccumulator::new();
        for (idx, member) in self.members.iter().enumerate() {
            let member_ctx = ctx.descend(idx.to_string(), member.name());
            if let ValidationResult::Err(errors) = member.validate(value, &member_ctx) {
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

pub fn intersection(members: Vec<ValidatorRef>, name: Option<String>) -> ValidatorRef {
    let default_name = format!(
        "({})",
        members
            .iter()
            .map(|m| m.name().to_string())
            .collect::<Vec<_>>()
            .join(" & ")
    );
    Arc::new(IntersectionValidator {
        name: Name::new(name.unwrap_or(default_name)),
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::refinement::{refinement, Predicate};
    use crate::irreducible::number;

    #[test]
    fn ok_iff_all_members_accept() {
        let positive = refinement(number(), Predicate::anonymous(|v| matches!(v, Value::Number(n) if *n > 0.0)), None);
        let even = refinement(
            number(),
            Predicate::new("even", |v| matches!(v, Value::Number(n) if n.rem_euclid(2.0) == 0.0)),
            None,
        );
        let t = intersection(vec![positive, even], None);
        let ctx = Context::root(t.name());

        assert!(t.validate(&Value::Number(4.0), &ctx).is_ok());
        assert!(t.validate(&Value::Number(3.0), &ctx).is_err());
        assert!(t.validate(&Value::Number(-4.0), &ctx).is_err());
    }

    #[test]
    fn accumulates_failures_from_every_failing_member() {
        let never_a = refinement(number(), Predicate::new("a", |_| false), None);
        let never_b = refinement(number(), Predicate::new("b", |_| false), None);
        let t = intersection(vec![never_a, never_b], None);
        let ctx = Context::root(t.name());
        let errors = t.validate(&Value::Number(1.0), &ctx).from_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn returns_original_value_on_success() {
        let t = intersection(vec![number()], None);
        let ctx = Context::root(t.name());
        let out = t.validate(&Value::Number(5.0), &ctx).from_ok();
        assert!(matches!(out, Value::Number(n) if n == 5.0));
    }
}
