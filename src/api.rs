//! Public entry points for running a [`Validator`] against a [`Value`]: the
//! "outer edge" of the algebra, not a combinator itself.

use crate::context::{Context, ContextEntry};
use crate::result::ValidationResult;
use crate::validator::ValidatorRef;
use crate::value::Value;

/// Validates `value` against `validator`, seeding a fresh root context named
/// after the validator.
pub fn validate(value: &Value, validator: &ValidatorRef) -> ValidationResult<Value> {
    validate_with_context(value, get_default_context(validator), validator)
}

/// Validates `value` against `validator` under a caller-supplied context —
/// lets this library's validators be composed as a sub-step of a larger
/// check that already has its own path tracking.
pub fn validate_with_context(
    value: &Value,
    ctx: Context,
    validator: &ValidatorRef,
) -> ValidationResult<Value> {
    validator.validate(value, &ctx)
}

/// A boolean-only predicate form of [`validate`].
pub fn is(value: &Value, validator: &ValidatorRef) -> bool {
    validate(value, validator).is_ok()
}

/// Validates and unwraps, panicking with the accumulated error descriptions
/// on failure (the "programmer failure" path).
pub fn unsafe_validate(value: &Value, validator: &ValidatorRef) -> Value {
    validate(value, validator).from_ok()
}

/// `getDefaultContext` — the root context a bare [`validate`] call seeds.
pub fn get_default_context(validator: &ValidatorRef) -> Context {
    Context::root(validator.name())
}

/// `getContextEntry` — the entry at `index`, if any.
pub fn get_context_entry(ctx: &Context, index: usize) -> Option<&ContextEntry> {
    ctx.entries().get(index)
}

/// Programmer-failure assertion: panics with the
/// `"[runtime-validation failure]"` prefix if `cond` is false. `message` is
/// evaluated lazily, only on failure.
pub fn assert(cond: bool, message: impl FnOnce() -> String) {
    if !cond {
        crash(&message());
    }
}

/// Raises a programmer failure carrying `msg`. Never returns.
pub fn crash(msg: &str) -> ! {
    panic!("[runtime-validation failure]\n{msg}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irreducible::number;

    #[test]
    fn validate_seeds_a_root_context_named_after_the_validator() {
        let t = number();
        let errors = validate(&Value::String("x".into()), &t).from_err();
        assert_eq!(errors.as_slice()[0].context.path(), ": number");
    }

    #[test]
    fn is_reports_success_without_exposing_errors() {
        let t = number();
        assert!(is(&Value::Number(1.0), &t));
        assert!(!is(&Value::String("x".into()), &t));
    }

    #[test]
    fn unsafe_validate_returns_the_value_on_success() {
        let t = number();
        assert!(matches!(
            unsafe_validate(&Value::Number(1.0), &t),
            Value::Number(n) if n == 1.0
        ));
    }

    #[test]
    #[should_panic(expected = "runtime-validation failure")]
    fn unsafe_validate_panics_on_failure() {
        let t = number();
        unsafe_validate(&Value::String("x".into()), &t);
    }

    #[test]
    #[should_panic(expected = "runtime-validation failure")]
    fn crash_carries_the_message() {
        crash("boom");
    }

    #[test]
    fn assert_does_not_panic_when_condition_holds() {
        assert(true, || "unreachable".to_string());
    }

    #[test]
    fn get_context_entry_indexes_into_the_path() {
        let t = number();
        let ctx = get_default_context(&t);
        assert_eq!(get_context_entry(&ctx, 0).unwrap().name.as_ref(), "number");
        assert!(get_context_entry(&ctx, 1).is_none());
    }
}
