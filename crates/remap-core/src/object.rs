use std::any::{Any, TypeId};

/// A value that can take part in a mapping, as a source or a destination.
///
/// Implemented for every `'static` type. Mapping routines receive objects as
/// `&dyn Object` so that a type map can verify at call time that it was
/// handed the types it was configured for.
pub trait Object: Any {
    /// The Rust type name of the concrete object.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> Object for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl core::fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Object").field(&self.type_name()).finish()
    }
}

pub fn downcast_ref<T: Any>(object: &dyn Object) -> Option<&T> {
    object.as_any().downcast_ref::<T>()
}

pub fn downcast_mut<T: Any>(object: &mut dyn Object) -> Option<&mut T> {
    object.as_any_mut().downcast_mut::<T>()
}

/// Identity of a mapped Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
}

impl TypeRef {
    pub fn of<T: Any>() -> TypeRef {
        TypeRef {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `object` is an instance of this type.
    pub fn is_type_of(&self, object: &dyn Object) -> bool {
        object.as_any().type_id() == self.id
    }
}

impl core::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name)
    }
}
