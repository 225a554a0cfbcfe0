//! End-to-end scenarios against the public API surface, exercising the
//! combinator algebra the way a caller actually would: build a validator
//! tree, then call `validate`.

use std::sync::Arc;

use runtime_shape::{
    array, class_of, mapping, maybe, number, object, recursion, refinement, string, validate,
    Class, Predicate, Value,
};

#[test]
fn mapping_over_refined_string_keys_accepts_a_matching_object() {
    let t = mapping(
        refinement(string(), Predicate::anonymous(|v| matches!(v, Value::String(s) if s.len() >= 2)), None),
        number(),
        None,
    );
    let input = Value::object(vec![("aa".into(), Value::Number(1.0))]);

    let result = validate(&input, &t);
    let out = result.from_ok();
    assert!(input.same_reference(&out));
}

#[test]
fn mapping_reports_the_exact_description_when_the_key_is_rejected() {
    let t = mapping(
        refinement(string(), Predicate::anonymous(|v| matches!(v, Value::String(s) if s.len() >= 2)), None),
        number(),
        None,
    );
    let input = Value::object(vec![("a".into(), Value::Number(1.0))]);

    let errors = validate(&input, &t).from_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.as_slice()[0].description,
        "Invalid value \"a\" supplied to : { [key: (string | <function1>)]: number }/a: (string | <function1>)"
    );
}

#[test]
fn mapping_reports_the_exact_description_when_the_value_is_rejected() {
    let t = mapping(
        refinement(string(), Predicate::anonymous(|v| matches!(v, Value::String(s) if s.len() >= 2)), None),
        number(),
        None,
    );
    let input = Value::object(vec![("aa".into(), Value::String("s".into()))]);

    let errors = validate(&input, &t).from_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.as_slice()[0].description,
        "Invalid value \"s\" supplied to : { [key: (string | <function1>)]: number }/aa: number"
    );
}

#[test]
fn mapping_accumulates_both_key_and_value_errors_for_the_same_entry() {
    let t = mapping(
        refinement(string(), Predicate::anonymous(|v| matches!(v, Value::String(s) if s.len() >= 2)), None),
        number(),
        None,
    );
    let input = Value::object(vec![("a".into(), Value::String("s".into()))]);

    let errors = validate(&input, &t).from_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn class_of_accepts_the_class_and_its_subclasses_but_not_unrelated_classes() {
    let a = Arc::new(Class::new("A"));
    let b = Arc::new(Class::extending("B", &a));
    let c = Arc::new(Class::new("C"));
    let t = class_of(a, None);

    assert!(validate(&Value::Class(b), &t).is_ok());
    let errors = validate(&Value::Class(c), &t).from_err();
    assert_eq!(errors.as_slice()[0].description, "Invalid value C supplied to : Class<A>");
}

#[test]
fn array_of_number_collapses_the_mismatched_tail_element_to_one_error() {
    let t = array(number(), None);
    let input = Value::array(vec![Value::Number(1.0), Value::Number(2.0), Value::String("x".into())]);

    let errors = validate(&input, &t).from_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.as_slice()[0].context.path(), ": Array<number>/2: number");
    assert!(matches!(&errors.as_slice()[0].value, Value::String(s) if s == "x"));
}

fn tree() -> runtime_shape::ValidatorRef {
    recursion("Tree", |self_ref| {
        object(
            vec![
                ("value".into(), number()),
                ("children".into(), array(self_ref)),
            ],
            None,
        )
    })
}

#[test]
fn recursive_tree_accepts_well_formed_nested_structures() {
    let t = tree();
    let input = Value::object(vec![
        ("value".into(), Value::Number(1.0)),
        (
            "children".into(),
            Value::array(vec![Value::object(vec![
                ("value".into(), Value::Number(2.0)),
                ("children".into(), Value::array(vec![])),
            ])]),
        ),
    ]);
    assert!(validate(&input, &t).is_ok());
}

#[test]
fn recursive_tree_reports_a_path_through_every_nesting_level() {
    let t = tree();
    let input = Value::object(vec![
        ("value".into(), Value::Number(1.0)),
        (
            "children".into(),
            Value::array(vec![Value::object(vec![
                ("value".into(), Value::String("x".into())),
                ("children".into(), Value::array(vec![])),
            ])]),
        ),
    ]);
    let errors = validate(&input, &t).from_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.as_slice()[0].context.path(),
        ": Tree/children: Array<Tree>/0: Tree/value: number"
    );
}

#[test]
fn optional_tuple_tail_tolerates_a_short_array() {
    let t = runtime_shape::tuple(vec![string(), maybe(number(), None)], None);
    let input = Value::array(vec![Value::String("a".into())]);
    assert!(validate(&input, &t).is_ok());
}
