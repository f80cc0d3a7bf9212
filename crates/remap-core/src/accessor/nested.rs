use super::{downcast, Getter, Read};
use crate::{Object, Result, Value};

use std::any::Any;

/// Steps from an object into one of its nested objects.
///
/// An absent nested object reads as `Null`, which ends a flattened path
/// early instead of failing it.
pub struct NestedGetter<T, U> {
    project: fn(&T) -> Option<&U>,
}

impl<T, U> NestedGetter<T, U> {
    pub fn new(project: fn(&T) -> Option<&U>) -> Self {
        Self { project }
    }
}

impl<T, U> Getter for NestedGetter<T, U>
where
    T: Any,
    U: Any,
{
    fn get<'a>(&self, target: &'a dyn Object) -> Result<Read<'a>> {
        let target = downcast::<T>(target)?;
        Ok(match (self.project)(target) {
            Some(nested) => Read::Object(nested),
            None => Read::Value(Value::Null),
        })
    }
}
