//! `object(props, name?)` — validates each declared property; a missing key
//! is substituted with `Value::Nil` and handed to the property's validator
//! (so `maybe(T)` tolerates absence but bare `T` does not). An ahash-indexed
//! property map keeps key lookup constant-time.

use std::any::Any;
use std::sync::Arc;

use ahash::AHashMap;

use crate::context::Context;
use crate::error::{ErrorAccumulator, Errors, ValidationError};
use crate::result::{self, ValidationResult};
use crate::validator::{Kind, Name, RenameToken, Validator, ValidatorRef};
use crate::value::Value;

pub(crate) struct ObjectValidator {
    name: Name,
    props: Vec<(String, ValidatorRef)>,
    props_index: AHashMap<String, usize>,
}

impl ObjectValidator {
    pub(crate) fn props(&self) -> &[(String, ValidatorRef)] {
        &self.props
    }

    pub(crate) fn has_property(&self, key: &str) -> bool {
        self.props_index.contains_key(key)
    }
}

impl Validator for ObjectValidator {
    fn name(&self) -> Arc<str> {
        self.name.get()
    }

    fn kind(&self) -> Kind {
        Kind::Object
    }

    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value> {
        if !matches!(value, Value::Object(_)) {
            return result::err(Errors::single(ValidationError::new(
                value.clone(),
                ctx.clone(),
            )));
        }

        let mut accumulator = ErrorAccumulator::new();
        for (key, validator) in &self.props {
            let prop_value = value.get(key);
            let prop_ctx = ctx.descend(key.clone(), validator.name());
            if let ValidationResult::Err(errors) = validator.validate(&prop_value, &prop_ctx) {
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

pub(crate) fn default_object_name(props: &[(String, ValidatorRef)]) -> String {
    let body = props
        .iter()
        .map(|(key, validator)| format!("{}: {}", key, validator.name()))
        .collect::<Vec<_>>()
        .join(", ");
    if body.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {body} }}")
    }
}

pub fn object(props: Vec<(String, ValidatorRef)>, name: Option<String>) -> ValidatorRef {
    let default_name = default_object_name(&props);
    let props_index = props
        .iter()
        .enumerate()
        .map(|(idx, (key, _))| (key.clone(), idx))
        .collect();
    Arc::new(ObjectValidator {
        name: Name::new(name.unwrap_or(default_name)),
        props,
        props_index,
    })
}
