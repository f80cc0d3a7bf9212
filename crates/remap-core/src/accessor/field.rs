use super::{downcast, downcast_mut, Getter, Read, Setter};
use crate::{FromValue, Object, Result, Value};

use std::any::Any;

/// Reads a struct field by reference and clones it into a [`Value`].
pub struct FieldGetter<T, V> {
    project: fn(&T) -> &V,
}

impl<T, V> FieldGetter<T, V> {
    pub fn new(project: fn(&T) -> &V) -> Self {
        Self { project }
    }
}

impl<T, V> Getter for FieldGetter<T, V>
where
    T: Any,
    V: Clone + Into<Value> + 'static,
{
    fn get<'a>(&self, target: &'a dyn Object) -> Result<Read<'a>> {
        let target = downcast::<T>(target)?;
        Ok(Read::Value((self.project)(target).clone().into()))
    }
}

/// Assigns a converted [`Value`] to a struct field.
pub struct FieldSetter<T, V> {
    project: fn(&mut T) -> &mut V,
}

impl<T, V> FieldSetter<T, V> {
    pub fn new(project: fn(&mut T) -> &mut V) -> Self {
        Self { project }
    }
}

impl<T, V> Setter for FieldSetter<T, V>
where
    T: Any,
    V: FromValue + 'static,
{
    fn set(&self, target: &mut dyn Object, value: Value) -> Result<()> {
        let target = downcast_mut::<T>(target)?;
        *(self.project)(target) = V::from_value(value)?;
        Ok(())
    }
}
