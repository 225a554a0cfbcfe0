//! `union([T0, ..], name?)` — first-match semantics: try each member in
//! order, collapsing to a single error at the union's own context if none
//! accepts the value.

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

struct UnionValidator {
    name: Name,
    members: Vec<ValidatorRef>,
}

impl Validator for UnionValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Union
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        for member in &self.members {
            if let ValidationResult::Ok(narrowed) = member.validate(value, ctx) {
                return result::ok(narrowed);
            }
        }
        result::err(Errors::single(ValidationError::new(
            value.clone(),
            ctx.clone(),
        )))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rename(&self, new_name: &str, _token: RenameToken) {
        self.name.set(new_name.to_string());
    }
}

pub fn union(members: Vec<ValidatorRef>, name: Option<String>) -> ValidatorRef {
    let default_name = format!(
        "({})",
        members
            .iter()
            .map(|m| m.name().to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    );
    Arc::new(UnionValidator {
        name: Name::new(name.unwrap_or(default_name)),
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irreducible::{boolean, number, string};

    #[test]
    fn first_match_wins() {
        let t = union(vec![string(), number()], None);
        let ctx = Context::root(t.name());
        assert!(t.validate(&Value::String("a".into()), &ctx).is_ok());
        assert!(t.validate(&Value::Number(1.0), &ctx).is_ok());
    }

    #[test]
    fn failure_collapses_to_one_error_at_unions_own_context() {
        let t = union(vec![string(), number()], None);
        let ctx = Context::root(t.name());
        let errors = t.validate(&Value::Bool(true), &ctx).from_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].context.path(), ": (string | number)");
    }

    #[test]
    fn later_branch_never_observed_when_earlier_matches() {
        // A union of [boolean, number] presented a boolean must not care
        // whether `number` would also (it wouldn't) match - first wins.
        let t = union(vec![boolean(), number()], None);
        let ctx = Context::root(t.name());
        assert!(t.validate(&Value::Bool(false), &ctx).is_ok());
    }
}
