//! Member accessors.
//!
//! A [`Getter`] reads one member off an object and a [`Setter`] writes one.
//! Accessors are built once, when a type's [`Shape`](crate::Shape) is
//! assembled, and reused by every mapping call. Reading through nested
//! objects is expressed by chaining getters in a [`SourcePath`].

mod field;
pub use field::{FieldGetter, FieldSetter};

mod method;
pub use method::{MethodGetter, MethodSetter};

mod nested;
pub use nested::NestedGetter;

mod path;
pub use path::SourcePath;

mod resolver;
pub use resolver::ResolverGetter;

use crate::{object, Error, Object, Result, Value};

use std::any::Any;

/// The result of reading a member.
pub enum Read<'a> {
    /// A scalar member value, possibly `Null`.
    Value(Value),

    /// A nested object, to be traversed by the next hop of a path.
    Object(&'a dyn Object),
}

impl Read<'_> {
    pub fn is_object(&self) -> bool {
        matches!(self, Read::Object(_))
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Read::Value(value) => Some(value),
            Read::Object(_) => None,
        }
    }
}

/// Reads a member off an object.
pub trait Getter: Send + Sync {
    fn get<'a>(&self, target: &'a dyn Object) -> Result<Read<'a>>;
}

/// Writes a member onto an object.
pub trait Setter: Send + Sync {
    fn set(&self, target: &mut dyn Object, value: Value) -> Result<()>;
}

fn downcast<T: Any>(target: &dyn Object) -> Result<&T> {
    object::downcast_ref::<T>(target)
        .ok_or_else(|| Error::accessor_target(std::any::type_name::<T>(), target.type_name()))
}

fn downcast_mut<T: Any>(target: &mut dyn Object) -> Result<&mut T> {
    let actual = (*target).type_name();
    object::downcast_mut::<T>(target)
        .ok_or_else(|| Error::accessor_target(std::any::type_name::<T>(), actual))
}
