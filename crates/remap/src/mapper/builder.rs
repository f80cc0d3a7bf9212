use super::{Mapper, PairKey};
use crate::Config;

use remap_core::{DefaultCreator, ObjectCreator, Reflect, Result, Shape, TypeMap};

use indexmap::{map::Entry, IndexMap};
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Collects type maps, then validates and compiles all of them at once.
#[derive(Default)]
pub struct Builder {
    config: Config,

    /// Type maps keyed by `(source, destination)`
    type_maps: IndexMap<PairKey, TypeMap>,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Creates the type map for `S -> D`, destinations made with
    /// `D::default()`.
    ///
    /// Replaces any type map previously created for the pair.
    pub fn create_map<S, D>(&mut self) -> &mut TypeMap
    where
        S: Reflect,
        D: Reflect + Default,
    {
        self.create_map_with::<S, D>(DefaultCreator::<D>::new())
    }

    /// Creates the type map for `S -> D` with a custom object creator.
    pub fn create_map_with<S, D>(&mut self, creator: impl ObjectCreator + 'static) -> &mut TypeMap
    where
        S: Reflect,
        D: Reflect,
    {
        let type_map = if self.config.discover_members {
            TypeMap::discover(Shape::of::<S>(), Shape::of::<D>(), creator)
        } else {
            TypeMap::with_members(Shape::of::<S>(), Shape::of::<D>(), creator)
        };

        self.insert(type_map)
    }

    /// Registers a type map assembled by hand.
    pub fn add_type_map(&mut self, type_map: TypeMap) -> &mut Self {
        self.insert(type_map);
        self
    }

    pub fn type_map<S: Any, D: Any>(&mut self) -> Option<&mut TypeMap> {
        self.type_maps
            .get_mut(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    /// Validates every type map, then compiles them into a [`Mapper`].
    ///
    /// The first validation error is returned; every failing type map is
    /// logged.
    pub fn build(&self) -> Result<Mapper> {
        if self.config.validate {
            let mut first = None;

            for type_map in self.type_maps.values() {
                if let Err(err) = type_map.validate() {
                    warn!(
                        source = type_map.source_type().name(),
                        destination = type_map.destination_type().name(),
                        error = %err,
                        "type map failed validation"
                    );
                    first.get_or_insert(err);
                }
            }

            if let Some(err) = first {
                return Err(err);
            }
        } else {
            warn!("type map validation is disabled; unmapped members are left untouched");
        }

        let map_funcs: IndexMap<_, _> = self
            .type_maps
            .iter()
            .map(|(key, type_map)| (*key, type_map.map_func()))
            .collect();

        debug!(type_maps = map_funcs.len(), "built mapper");

        Ok(Mapper {
            map_funcs: Arc::new(map_funcs),
        })
    }

    fn insert(&mut self, type_map: TypeMap) -> &mut TypeMap {
        let key = (type_map.source_type().id(), type_map.destination_type().id());

        match self.type_maps.entry(key) {
            Entry::Occupied(mut entry) => {
                debug!(
                    source = type_map.source_type().name(),
                    destination = type_map.destination_type().name(),
                    "replacing type map"
                );
                entry.insert(type_map);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(type_map),
        }
    }
}
