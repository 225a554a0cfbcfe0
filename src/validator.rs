//! The shape every validator satisfies: a stable `name`, a discriminant
//! `kind`, and a `validate` function, dispatched through a closed tagged
//! variant rather than an open trait hierarchy.

use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::context::Context;
use crate::result::ValidationResult;
use crate::value::Value;

/// The closed discriminant set. All eight irreducibles share
/// `Kind::Irreducible`; they're told apart by `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Irreducible,
    Literal,
    InstanceOf,
    Array,
    Union,
    Tuple,
    Intersection,
    Maybe,
    Mapping,
    Refinement,
    Object,
    Keys,
    Exact,
    Shape,
}

/// Every validator's interior-mutable name cell.
///
/// Validators are immutable after construction except for the single
/// back-patch `recursion` performs: it needs to rewrite the name of whatever
/// concrete validator its builder function returned, whatever its kind, so
/// every validator stores its name behind this cell rather than a plain
/// field. The setter is crate-private; only `recursion()` calls it.
#[derive(Debug)]
pub(crate) struct Name(RwLock<Arc<str>>);

impl Name {
    pub(crate) fn new(name: impl Into<Arc<str>>) -> Self {
        Name(RwLock::new(name.into()))
    }

    pub(crate) fn get(&self) -> Arc<str> {
        self.0.read().expect("name lock poisoned").clone()
    }

    pub(crate) fn set(&self, name: impl Into<Arc<str>>) {
        *self.0.write().expect("name lock poisoned") = name.into();
    }
}

/// An unforgeable capability: the only way to obtain one is
/// [`RenameToken::new`], which is crate-private, so only code inside this
/// crate can ever call [`Validator::rename`] despite it sitting on a public
/// trait. `recursion()` is the sole caller.
#[derive(Debug)]
pub struct RenameToken(());

impl RenameToken {
    pub(crate) fn new() -> Self {
        RenameToken(())
    }
}

/// A type descriptor that can be applied to a [`Value`] to decide membership
/// and, on success, narrow it.
pub trait Validator: Send + Sync {
    fn name(&self) -> Arc<str>;
    fn kind(&self) -> Kind;
    fn validate(&self, value: &Value, ctx: &Context) -> ValidationResult<Value>;

    /// Used by `$keys`/`$exact`/`$shape` to introspect an `object`-kind
    /// validator's declared properties, and by `recursion`'s back-patch to
    /// reach the concrete validator behind a `ValidatorRef`.
    fn as_any(&self) -> &dyn Any;

    /// Rewrites this validator's name in place. Requires a [`RenameToken`],
    /// which only this crate can construct, so this is effectively
    /// uncallable from outside it even though the trait is public.
    fn rename(&self, new_name: &str, token: RenameToken);
}

/// Shared handle to a validator: many parents may hold the same child, which
/// `Arc` gives us for free since Rust has no lifetime-free non-owning handle
/// into a heap-allocated trait object tree that also supports `recursion`'s
/// late binding.
pub type ValidatorRef = Arc<dyn Validator>;

/// `getTypeName` — a validator's current display name.
pub fn get_type_name(validator: &ValidatorRef) -> Arc<str> {
    validator.name()
}
