//! `classOf(Ctor, name?)` — accepts constructor functions themselves:
//! `v === Ctor` or `Ctor` is a superclass of `v`. Implemented as a
//! refinement over `fun`.

use std::sync::Arc;

use crate::combinators::refinement::{refinement, Predicate};
use crate::irreducible::fun;
use crate::validator::ValidatorRef;
use crate::value::{Class, Value};

/// Default `name = "Class<" + Ctor.name + ">"`.
pub fn class_of(class: Arc<Class>, name: Option<String>) -> ValidatorRef {
    let default_name = format!("Class<{}>", class.name);
    let target = class.clone();
    let predicate = Predicate::new(format!("Class<{}>", class.name), move |v| {
        matches!(v, Value::Class(c) if c.is_or_extends(&target))
    });
    refinement(fun(), predicate, Some(name.unwrap_or(default_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn accepts_class_itself_and_subclasses() {
        let a = Arc::new(Class::new("A"));
        let b = Arc::new(Class::extending("B", &a));
        let c = Arc::new(Class::new("C"));

        let t = class_of(a.clone(), None);
        let ctx = Context::root(t.name());

        assert!(t.validate(&Value::Class(a), &ctx).is_ok());
        assert!(t.validate(&Value::Class(b), &ctx).is_ok());
        assert!(t.validate(&Value::Class(c), &ctx).is_err());
    }

    #[test]
    fn default_name_is_class_angle_bracket() {
        let a = Arc::new(Class::new("A"));
        assert_eq!(class_of(a, None).name().as_ref(), "Class<A>");
    }

    #[test]
    fn error_description_matches_spec_example() {
        let a = Arc::new(Class::new("A"));
        let c = Arc::new(Class::new("C"));
        let t = class_of(a, None);
        let ctx = Context::root(t.name());
        let errors = t.validate(&Value::Class(c), &ctx).from_err();
        assert_eq!(errors.as_slice()[0].description, "Invalid value C supplied to : Class<A>");
    }
}
