//! Construction of destination objects.

use crate::{object, Error, MapSide, Object, Result};

use std::{any::Any, marker::PhantomData};

/// Produces a fresh destination object for a mapping call that was not
/// handed one.
pub trait ObjectCreator: Send + Sync {
    fn create(&self, source: &dyn Object) -> Result<Box<dyn Object>>;
}

impl<F> ObjectCreator for F
where
    F: Fn(&dyn Object) -> Result<Box<dyn Object>> + Send + Sync,
{
    fn create(&self, source: &dyn Object) -> Result<Box<dyn Object>> {
        self(source)
    }
}

/// Creates destinations with `T::default()`.
pub struct DefaultCreator<T>(PhantomData<fn() -> T>);

impl<T> DefaultCreator<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for DefaultCreator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Any> ObjectCreator for DefaultCreator<T> {
    fn create(&self, _source: &dyn Object) -> Result<Box<dyn Object>> {
        Ok(Box::new(T::default()))
    }
}

/// Creates destinations from the typed source.
pub struct FromFn<S, D, F> {
    create: F,
    _p: PhantomData<fn(&S) -> D>,
}

/// Builds an [`ObjectCreator`] from a closure over the concrete source type.
pub fn from_fn<S, D, F>(create: F) -> FromFn<S, D, F>
where
    F: Fn(&S) -> Result<D> + Send + Sync,
{
    FromFn {
        create,
        _p: PhantomData,
    }
}

impl<S, D, F> ObjectCreator for FromFn<S, D, F>
where
    S: Any,
    D: Any,
    F: Fn(&S) -> Result<D> + Send + Sync,
{
    fn create(&self, source: &dyn Object) -> Result<Box<dyn Object>> {
        let Some(typed) = object::downcast_ref::<S>(source) else {
            return Err(Error::type_mismatch(
                MapSide::Source,
                std::any::type_name::<S>(),
                source.type_name(),
            ));
        };
        Ok(Box::new((self.create)(typed)?))
    }
}
