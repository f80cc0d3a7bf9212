mod builder;
pub use builder::Builder;

use remap_core::{Error, MapFunc, MapSide, Object, Result};

use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

pub(crate) type PairKey = (TypeId, TypeId);

/// A frozen registry of compiled mapping routines, one per source and
/// destination type pair.
///
/// Built once with [`Mapper::builder`]. Cloning is cheap and clones share
/// the same routines.
#[derive(Clone)]
pub struct Mapper {
    map_funcs: Arc<IndexMap<PairKey, MapFunc>>,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Maps `source` into a new `D` made by the type map's object creator.
    pub fn map<S: Any, D: Any>(&self, source: &S) -> Result<D> {
        let mapped = self.map_func::<S, D>()?.map(source, None)?;
        let actual = (*mapped).type_name();

        match mapped.into_any().downcast::<D>() {
            Ok(mapped) => Ok(*mapped),
            Err(_) => Err(Error::type_mismatch(
                MapSide::Destination,
                std::any::type_name::<D>(),
                actual,
            )),
        }
    }

    /// Maps `source` into an existing destination.
    pub fn map_into<S: Any, D: Any>(&self, source: &S, destination: &mut D) -> Result<()> {
        self.map_func::<S, D>()?.map_into(source, destination)
    }

    /// Returns the compiled routine for `S -> D`.
    pub fn map_func<S: Any, D: Any>(&self) -> Result<&MapFunc> {
        self.map_funcs
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or_else(|| {
                Error::type_map_not_found(std::any::type_name::<S>(), std::any::type_name::<D>())
            })
    }

    pub fn contains<S: Any, D: Any>(&self) -> bool {
        self.map_funcs
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    pub fn len(&self) -> usize {
        self.map_funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_funcs.is_empty()
    }
}

impl core::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.map_funcs.values()).finish()
    }
}
