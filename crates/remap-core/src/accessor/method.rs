use super::{downcast, downcast_mut, Getter, Read, Setter};
use crate::{FromValue, Object, Result, Value};

use std::any::Any;

/// Reads a member through an accessor method, e.g. `User::full_name`.
pub struct MethodGetter<T, V> {
    call: fn(&T) -> V,
}

impl<T, V> MethodGetter<T, V> {
    pub fn new(call: fn(&T) -> V) -> Self {
        Self { call }
    }
}

impl<T, V> Getter for MethodGetter<T, V>
where
    T: Any,
    V: Into<Value> + 'static,
{
    fn get<'a>(&self, target: &'a dyn Object) -> Result<Read<'a>> {
        let target = downcast::<T>(target)?;
        Ok(Read::Value((self.call)(target).into()))
    }
}

/// Writes a member through a mutator method, e.g. `UserDto::set_name`.
pub struct MethodSetter<T, V> {
    call: fn(&mut T, V),
}

impl<T, V> MethodSetter<T, V> {
    pub fn new(call: fn(&mut T, V)) -> Self {
        Self { call }
    }
}

impl<T, V> Setter for MethodSetter<T, V>
where
    T: Any,
    V: FromValue + 'static,
{
    fn set(&self, target: &mut dyn Object, value: Value) -> Result<()> {
        let target = downcast_mut::<T>(target)?;
        (self.call)(target, V::from_value(value)?);
        Ok(())
    }
}
