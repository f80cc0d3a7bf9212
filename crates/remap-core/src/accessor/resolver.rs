use super::{downcast, Getter, Read};
use crate::{Object, Result, Value};

use std::any::Any;
use std::marker::PhantomData;

/// Computes a destination value from the whole source object.
///
/// Used for members that no path through the source can express, e.g. a
/// `fullName` built from two source fields.
pub struct ResolverGetter<S, V, F> {
    resolve: F,
    _p: PhantomData<fn(&S) -> V>,
}

impl<S, V, F> ResolverGetter<S, V, F>
where
    F: Fn(&S) -> Result<V>,
{
    pub fn new(resolve: F) -> Self {
        Self {
            resolve,
            _p: PhantomData,
        }
    }
}

impl<S, V, F> Getter for ResolverGetter<S, V, F>
where
    S: Any,
    V: Into<Value> + 'static,
    F: Fn(&S) -> Result<V> + Send + Sync,
{
    fn get<'a>(&self, target: &'a dyn Object) -> Result<Read<'a>> {
        let source = downcast::<S>(target)?;
        Ok(Read::Value((self.resolve)(source)?.into()))
    }
}
