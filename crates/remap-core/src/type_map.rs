mod validate;

use crate::accessor::{ResolverGetter, SourcePath};
use crate::creator::ObjectCreator;
use crate::{
    naming, object, Error, MapFunc, MapSide, Object, PropertyMap, Result, Shape, TypeRef, Value,
};

use indexmap::IndexMap;
use std::{any::Any, sync::Arc};
use tracing::debug;

/// A hook run around the property copy phase of a mapping call.
pub type MapHook = Arc<dyn Fn(&dyn Object, &mut dyn Object) -> Result<()> + Send + Sync>;

/// Mapping configuration for one source and destination type pair.
pub struct TypeMap {
    source: Shape,
    destination: Shape,

    /// Property maps keyed by destination member name
    property_maps: IndexMap<String, PropertyMap>,

    object_creator: Arc<dyn ObjectCreator>,

    before_map: Option<MapHook>,
    after_map: Option<MapHook>,
}

impl TypeMap {
    /// Creates a type map with no property maps.
    pub fn new(
        source: Shape,
        destination: Shape,
        creator: impl ObjectCreator + 'static,
    ) -> TypeMap {
        TypeMap {
            source,
            destination,
            property_maps: IndexMap::new(),
            object_creator: Arc::new(creator),
            before_map: None,
            after_map: None,
        }
    }

    /// Creates a type map with an unmapped property map for every writable
    /// destination member.
    pub fn with_members(
        source: Shape,
        destination: Shape,
        creator: impl ObjectCreator + 'static,
    ) -> TypeMap {
        let mut type_map = TypeMap::new(source, destination, creator);

        for member in type_map.destination.members() {
            if let Some(setter) = member.setter() {
                type_map.property_maps.insert(
                    member.name().to_string(),
                    PropertyMap::new(member.name(), setter.clone()),
                );
            }
        }

        type_map
    }

    /// Like [`with_members`](Self::with_members), then maps every member whose
    /// name resolves against the source shape.
    ///
    /// Members that do not resolve stay unmapped and are reported by
    /// [`validate`](Self::validate).
    pub fn discover(
        source: Shape,
        destination: Shape,
        creator: impl ObjectCreator + 'static,
    ) -> TypeMap {
        let mut type_map = TypeMap::with_members(source, destination, creator);

        for property_map in type_map.property_maps.values_mut() {
            let path = naming::resolve_member(&type_map.source, property_map.member_name());
            if let Some(path) = path {
                property_map.map_from(path);
            }
        }

        debug!(
            source = type_map.source.ty().name(),
            destination = type_map.destination.ty().name(),
            members = type_map.property_maps.len(),
            unmapped = type_map.unmapped_property_maps().count(),
            "discovered type map"
        );

        type_map
    }

    pub fn source_type(&self) -> TypeRef {
        self.source.ty()
    }

    pub fn destination_type(&self) -> TypeRef {
        self.destination.ty()
    }

    pub fn source_shape(&self) -> &Shape {
        &self.source
    }

    pub fn destination_shape(&self) -> &Shape {
        &self.destination
    }

    /// Registers a property map, replacing any previous one for the same
    /// destination member.
    pub fn add_property_map(&mut self, property_map: PropertyMap) {
        self.property_maps
            .insert(property_map.member_name().to_string(), property_map);
    }

    pub fn property_map(&self, member_name: &str) -> Option<&PropertyMap> {
        self.property_maps.get(member_name)
    }

    pub fn property_map_mut(&mut self, member_name: &str) -> Option<&mut PropertyMap> {
        self.property_maps.get_mut(member_name)
    }

    pub fn property_maps(&self) -> impl ExactSizeIterator<Item = &PropertyMap> {
        self.property_maps.values()
    }

    /// Property maps the compiled routine writes: mapped and not ignored.
    pub fn mapped_property_maps(&self) -> impl Iterator<Item = &PropertyMap> {
        self.active_property_maps().map(|(pm, _)| pm)
    }

    /// Mapped, non-ignored property maps paired with the source path each
    /// one reads.
    pub(crate) fn active_property_maps(
        &self,
    ) -> impl Iterator<Item = (&PropertyMap, &SourcePath)> {
        self.property_maps
            .values()
            .filter_map(|pm| pm.active_source().map(|source| (pm, source)))
    }

    /// Property maps that were never mapped, whether ignored or not.
    pub fn unmapped_property_maps(&self) -> impl Iterator<Item = &PropertyMap> {
        self.property_maps.values().filter(|pm| !pm.is_mapped())
    }

    pub fn object_creator(&self) -> &Arc<dyn ObjectCreator> {
        &self.object_creator
    }

    pub fn set_object_creator(&mut self, creator: impl ObjectCreator + 'static) {
        self.object_creator = Arc::new(creator);
    }

    pub fn before_map_func(&self) -> Option<&MapHook> {
        self.before_map.as_ref()
    }

    pub fn after_map_func(&self) -> Option<&MapHook> {
        self.after_map.as_ref()
    }

    pub fn set_before_map_func(
        &mut self,
        hook: impl Fn(&dyn Object, &mut dyn Object) -> Result<()> + Send + Sync + 'static,
    ) {
        self.before_map = Some(Arc::new(hook));
    }

    pub fn set_after_map_func(
        &mut self,
        hook: impl Fn(&dyn Object, &mut dyn Object) -> Result<()> + Send + Sync + 'static,
    ) {
        self.after_map = Some(Arc::new(hook));
    }

    /// Sets the before map hook from a closure over the concrete types.
    pub fn before_map<S, D>(
        &mut self,
        hook: impl Fn(&S, &mut D) -> Result<()> + Send + Sync + 'static,
    ) -> Result<()>
    where
        S: Any,
        D: Any,
    {
        self.before_map = Some(self.typed_hook(hook)?);
        Ok(())
    }

    /// Sets the after map hook from a closure over the concrete types.
    pub fn after_map<S, D>(
        &mut self,
        hook: impl Fn(&S, &mut D) -> Result<()> + Send + Sync + 'static,
    ) -> Result<()>
    where
        S: Any,
        D: Any,
    {
        self.after_map = Some(self.typed_hook(hook)?);
        Ok(())
    }

    /// Returns the property map of a writable destination member, creating an
    /// unmapped one if none was registered.
    pub fn member(&mut self, member_name: &str) -> Result<&mut PropertyMap> {
        if !self.property_maps.contains_key(member_name) {
            let setter = self
                .destination
                .member(member_name)
                .and_then(|member| member.setter())
                .ok_or_else(|| {
                    Error::unknown_member(self.destination.ty().name(), member_name)
                })?;

            let property_map = PropertyMap::new(member_name, setter.clone());
            self.property_maps
                .insert(member_name.to_string(), property_map);
        }

        self.property_maps
            .get_mut(member_name)
            .ok_or_else(|| Error::unknown_member(self.destination.ty().name(), member_name))
    }

    /// Maps a destination member from a dotted source path, e.g.
    /// `company.name`.
    pub fn map_member(&mut self, member_name: &str, path: &str) -> Result<&mut PropertyMap> {
        let path = naming::resolve_path(&self.source, path)?;
        Ok(self.member(member_name)?.map_from(path))
    }

    /// Maps a destination member from a value computed over the whole source.
    pub fn map_member_from<S, V, F>(
        &mut self,
        member_name: &str,
        resolve: F,
    ) -> Result<&mut PropertyMap>
    where
        S: Any,
        V: Into<Value> + 'static,
        F: Fn(&S) -> Result<V> + Send + Sync + 'static,
    {
        self.expect_source::<S>()?;

        let getter = Arc::new(ResolverGetter::new(resolve));
        let path = SourcePath::single(format!("{member_name}()"), getter);
        Ok(self.member(member_name)?.map_from(path))
    }

    /// Excludes a destination member from mapping.
    pub fn ignore_member(&mut self, member_name: &str) -> Result<&mut PropertyMap> {
        Ok(self.member(member_name)?.ignore())
    }

    /// Compiles the current configuration into a mapping routine.
    pub fn map_func(&self) -> MapFunc {
        MapFunc::new(self)
    }

    fn typed_hook<S, D>(
        &self,
        hook: impl Fn(&S, &mut D) -> Result<()> + Send + Sync + 'static,
    ) -> Result<MapHook>
    where
        S: Any,
        D: Any,
    {
        self.expect_source::<S>()?;

        if TypeRef::of::<D>() != self.destination.ty() {
            return Err(Error::type_mismatch(
                MapSide::Destination,
                self.destination.ty().name(),
                std::any::type_name::<D>(),
            ));
        }

        Ok(Arc::new(
            move |source: &dyn Object, destination: &mut dyn Object| -> Result<()> {
                let actual = (*destination).type_name();
                let Some(source) = object::downcast_ref::<S>(source) else {
                    return Err(Error::type_mismatch(
                        MapSide::Source,
                        std::any::type_name::<S>(),
                        source.type_name(),
                    ));
                };
                let Some(destination) = object::downcast_mut::<D>(destination) else {
                    return Err(Error::type_mismatch(
                        MapSide::Destination,
                        std::any::type_name::<D>(),
                        actual,
                    ));
                };
                hook(source, destination)
            },
        ))
    }

    fn expect_source<S: Any>(&self) -> Result<()> {
        if TypeRef::of::<S>() != self.source.ty() {
            return Err(Error::type_mismatch(
                MapSide::Source,
                self.source.ty().name(),
                std::any::type_name::<S>(),
            ));
        }
        Ok(())
    }
}

impl core::fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("TypeMap")
            .field("source", &self.source.ty().name())
            .field("destination", &self.destination.ty().name())
            .field("property_maps", &self.property_maps.values().collect::<Vec<_>>())
            .field("before_map", &self.before_map.is_some())
            .field("after_map", &self.after_map.is_some())
            .finish()
    }
}
