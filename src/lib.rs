//! Runtime type validation combinators.
//!
//! A [`Validator`] is a composable check against a dynamically shaped
//! [`Value`]: built up from irreducible atoms (`string`, `number`, …) through
//! combinators (`array`, `union`, `object`, …), then run with [`validate`].
//! On success, composite validators return the original value's reference
//! (see [`Value::same_reference`]); on failure, every error collected
//! carries the offending value, the path to it, and a rendered description.

mod api;
mod combinators;
mod context;
mod error;
mod irreducible;
mod result;
mod validator;
mod value;

pub use api::{
    assert, crash, get_context_entry, get_default_context, is, unsafe_validate, validate,
    validate_with_context,
};
pub use combinators::array::array;
pub use combinators::class_of::class_of;
pub use combinators::exact::exact;
pub use combinators::instance_of::instance_of;
pub use combinators::intersection::intersection;
pub use combinators::keys::keys;
pub use combinators::literal::{literal, Literal};
pub use combinators::mapping::mapping;
pub use combinators::maybe::maybe;
pub use combinators::object::object;
pub use combinators::recursion::recursion;
pub use combinators::refinement::{refinement, Predicate};
pub use combinators::shape::shape;
pub use combinators::tuple::tuple;
pub use combinators::union::union;
pub use context::{Context, ContextEntry};
pub use error::{Errors, ValidationError};
pub use irreducible::{any, arr, boolean, fun, nil, number, obj, string};
pub use result::{err, ok, ValidationResult};
pub use validator::{get_type_name, Kind, RenameToken, Validator, ValidatorRef};
pub use value::{stringify, Class, Func, Value};
